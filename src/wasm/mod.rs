//! WASM bindings for the reader
//!
//! The host app drives all I/O: navigation methods return a fetch plan
//! (`{generation, fetch}`), the host retrieves each listed surah document
//! and reports back via `supplyPart`/`failPart`, then polls `takePage`.
//! Results tagged with a superseded generation never surface.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::content::{PageContent, PageRequest, Segment};
use crate::pages::PageInfo;
use crate::verse::AyahRef;
use crate::{meta, search, Reader};

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM-exposed reader wrapper
#[wasm_bindgen]
pub struct WasmReader {
    reader: Reader,
}

#[wasm_bindgen]
impl WasmReader {
    /// Create a new reader positioned at page 1
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            reader: Reader::new(),
        }
    }

    /// Currently displayed page number
    #[wasm_bindgen(js_name = currentPage)]
    pub fn current_page(&self) -> u16 {
        self.reader.current_page()
    }

    /// Page descriptor (out-of-range numbers clamp to 1..=600)
    #[wasm_bindgen(js_name = getPageInfo)]
    pub fn get_page_info(&self, page: u16) -> JsValue {
        let info = PageInfoJs::from(self.reader.page_info(page));
        serde_wasm_bindgen::to_value(&info).unwrap_or(JsValue::NULL)
    }

    /// Page number containing an ayah (1 for invalid coordinates)
    #[wasm_bindgen(js_name = getPageFromAyah)]
    pub fn get_page_from_ayah(&self, surah: u16, ayah: u16) -> u16 {
        self.reader.page_for_ayah(AyahRef::new(surah, ayah))
    }

    /// Jump to a page; returns the fetch plan for it
    #[wasm_bindgen(js_name = gotoPage)]
    pub fn goto_page(&mut self, page: u16) -> JsValue {
        request_to_js(self.reader.goto_page(page))
    }

    /// Jump to an ayah (deep link); returns the fetch plan
    #[wasm_bindgen(js_name = gotoAyah)]
    pub fn goto_ayah(&mut self, surah: u16, ayah: u16) -> JsValue {
        request_to_js(self.reader.goto_ayah(AyahRef::new(surah, ayah)))
    }

    /// Turn to the next page; returns the fetch plan
    #[wasm_bindgen(js_name = nextPage)]
    pub fn next_page(&mut self) -> JsValue {
        request_to_js(self.reader.next_page())
    }

    /// Turn to the previous page; returns the fetch plan
    #[wasm_bindgen(js_name = prevPage)]
    pub fn prev_page(&mut self) -> JsValue {
        request_to_js(self.reader.prev_page())
    }

    /// Deliver a fetched surah document (raw JSON from the content store)
    #[wasm_bindgen(js_name = supplyPart)]
    pub fn supply_part(&mut self, generation: u32, surah: u16, json: &str) {
        self.reader.supply_part(generation, surah, json);
    }

    /// Report a failed fetch for a surah
    #[wasm_bindgen(js_name = failPart)]
    pub fn fail_part(&mut self, generation: u32, surah: u16) {
        self.reader.fail_part(generation, surah);
    }

    /// Take the current page's content once all its surahs have settled.
    /// Returns null while loading (or after the content was already taken);
    /// a page with zero segments means "load failed", not "end of text".
    #[wasm_bindgen(js_name = takePage)]
    pub fn take_page(&mut self) -> JsValue {
        match self.reader.take_page() {
            Some(content) => {
                serde_wasm_bindgen::to_value(&PageContentJs::from(&content))
                    .unwrap_or(JsValue::NULL)
            }
            None => JsValue::NULL,
        }
    }

    /// Record reading progress under today's local date
    #[wasm_bindgen(js_name = logProgress)]
    pub fn log_progress(&mut self) {
        let date = local_date_string();
        self.reader.record_progress(&date);
    }

    /// Record reading progress under an explicit `YYYY-MM-DD` date
    #[wasm_bindgen(js_name = recordProgress)]
    pub fn record_progress(&mut self, date: &str) {
        self.reader.record_progress(date);
    }

    /// Append a raw `{date, start, end}` event. Malformed events are a
    /// no-op and return false.
    #[wasm_bindgen(js_name = appendLog)]
    pub fn append_log(&mut self, event_json: &str) -> bool {
        match serde_json::from_str(event_json) {
            Ok(event) => {
                self.reader.log_mut().append(event);
                true
            }
            Err(_) => false,
        }
    }

    /// Session history, most recent first
    #[wasm_bindgen(js_name = logEntries)]
    pub fn log_entries(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.reader.log().entries()).unwrap_or(JsValue::NULL)
    }

    /// Delete one history entry by position (out-of-range is a no-op)
    #[wasm_bindgen(js_name = deleteLog)]
    pub fn delete_log(&mut self, index: usize) {
        self.reader.log_mut().delete(index);
    }

    /// Drop the entire history
    #[wasm_bindgen(js_name = clearLog)]
    pub fn clear_log(&mut self) {
        self.reader.log_mut().clear();
    }

    /// Serialize the history for host persistence
    #[wasm_bindgen(js_name = exportLog)]
    pub fn export_log(&self) -> String {
        self.reader.log().to_json()
    }

    /// Restore persisted history; malformed JSON leaves it untouched
    #[wasm_bindgen(js_name = importLog)]
    pub fn import_log(&mut self, json: &str) -> bool {
        self.reader.log_mut().load_json(json)
    }

    /// Fuzzy-match surahs by name or number, best first
    #[wasm_bindgen(js_name = searchSurahs)]
    pub fn search_surahs(&self, query: &str) -> JsValue {
        let matches: Vec<SurahMatchJs> = search::match_surahs(query)
            .into_iter()
            .map(|m| SurahMatchJs {
                number: m.number,
                name: m.name,
                distance: m.distance,
            })
            .collect();
        serde_wasm_bindgen::to_value(&matches).unwrap_or(JsValue::NULL)
    }

    /// Static surah metadata for list views
    #[wasm_bindgen(js_name = surahList)]
    pub fn surah_list(&self) -> JsValue {
        let list: Vec<SurahMetaJs> = meta::SURAHS
            .iter()
            .map(|s| SurahMetaJs {
                number: s.number,
                name: s.name,
                ayahs: s.ayah_count,
            })
            .collect();
        serde_wasm_bindgen::to_value(&list).unwrap_or(JsValue::NULL)
    }
}

impl Default for WasmReader {
    fn default() -> Self {
        Self::new()
    }
}

fn request_to_js(request: PageRequest) -> JsValue {
    let js = PageRequestJs {
        generation: request.generation,
        fetch: request.fetch.to_vec(),
    };
    serde_wasm_bindgen::to_value(&js).unwrap_or(JsValue::NULL)
}

/// Local calendar date as `YYYY-MM-DD`.
fn local_date_string() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

/// Serializable page descriptor for JS
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfoJs {
    pub page_number: u16,
    pub juz: u8,
    pub start_surah: u16,
    pub start_ayah: u16,
    pub end_surah: u16,
    pub end_ayah: u16,
}

impl From<&PageInfo> for PageInfoJs {
    fn from(info: &PageInfo) -> Self {
        Self {
            page_number: info.number,
            juz: info.juz,
            start_surah: info.start.surah,
            start_ayah: info.start.ayah,
            end_surah: info.end.surah,
            end_ayah: info.end.ayah,
        }
    }
}

/// Serializable fetch plan for JS
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequestJs {
    pub generation: u32,
    pub fetch: Vec<u16>,
}

/// Serializable page segment for JS
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentJs {
    #[serde(rename = "type")]
    pub kind: String,
    pub surah: u16,
    pub name: Option<String>,
    pub number: Option<u16>,
    pub text: Option<String>,
}

/// Serializable page content for JS
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContentJs {
    pub page_number: u16,
    pub segments: Vec<SegmentJs>,
}

impl From<&PageContent> for PageContentJs {
    fn from(content: &PageContent) -> Self {
        let segments = content
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::SurahHeader { surah, name } => SegmentJs {
                    kind: "header".to_string(),
                    surah: *surah,
                    name: Some(name.clone()),
                    number: None,
                    text: None,
                },
                Segment::Ayah {
                    surah,
                    number,
                    text,
                } => SegmentJs {
                    kind: "ayah".to_string(),
                    surah: *surah,
                    name: None,
                    number: Some(*number),
                    text: Some(text.clone()),
                },
            })
            .collect();
        Self {
            page_number: content.page_number,
            segments,
        }
    }
}

/// Serializable surah match for JS
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahMatchJs {
    pub number: u16,
    pub name: &'static str,
    pub distance: usize,
}

/// Serializable surah metadata for JS
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahMetaJs {
    pub number: u16,
    pub name: &'static str,
    pub ayahs: u16,
}
