//! Cancellable page content loading
//!
//! The loader is the asynchronous boundary of the core: it never performs
//! I/O itself. [`PageLoader::request`] hands the host a fetch plan tagged
//! with a request generation; the host fetches each listed surah document
//! and reports back through [`PageLoader::supply`] / [`PageLoader::fail`].
//! Superseding requests invalidate earlier generations, so a stale result
//! can update the shared cache but can never surface as page content.

use smallvec::SmallVec;

use super::cache::SurahCache;
use super::document;
use crate::meta;
use crate::pages::PageInfo;

/// Renderable segment of a page, in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Marks the start of a surah; emitted only when the page truly
    /// begins the surah at ayah 1 (not when it resumes mid-surah).
    SurahHeader { surah: u16, name: String },
    Ayah { surah: u16, number: u16, text: String },
}

/// Realized, renderable content of one page. Transient; recomputed per
/// request. Empty segments mean "load failed", not "end of text".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub page_number: u16,
    pub segments: Vec<Segment>,
}

/// Fetch plan for the current request. `fetch` lists the surahs the host
/// must retrieve; surahs already cached, failed, or in flight are omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: u32,
    pub fetch: SmallVec<[u16; 2]>,
}

/// The request currently allowed to produce visible content.
#[derive(Debug)]
struct CurrentRequest {
    generation: u32,
    page: PageInfo,
    /// Spanned surahs not yet resolved in the cache.
    missing: SmallVec<[u16; 2]>,
}

/// Turns page descriptors into [`PageContent`], fetching surah documents
/// through the host at most once per surah per process lifetime.
#[derive(Debug)]
pub struct PageLoader {
    cache: SurahCache,
    generation: u32,
    current: Option<CurrentRequest>,
}

impl Default for PageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PageLoader {
    pub fn new() -> Self {
        Self {
            cache: SurahCache::new(),
            generation: 0,
            current: None,
        }
    }

    /// Begin loading a page, superseding any in-flight request. The
    /// previous request's generation becomes stale immediately; its
    /// results may still land in the cache but will never be delivered.
    pub fn request(&mut self, page: &PageInfo) -> PageRequest {
        self.generation = self.generation.wrapping_add(1);

        let mut fetch: SmallVec<[u16; 2]> = SmallVec::new();
        let mut missing: SmallVec<[u16; 2]> = SmallVec::new();
        for surah in page.start.surah..=page.end.surah {
            if self.cache.needs_fetch(surah) {
                self.cache.mark_pending(surah);
                fetch.push(surah);
            }
            if !self.cache.is_resolved(surah) {
                missing.push(surah);
            }
        }

        self.current = Some(CurrentRequest {
            generation: self.generation,
            page: *page,
            missing,
        });

        PageRequest {
            generation: self.generation,
            fetch,
        }
    }

    /// Deliver a fetched surah document. The cache write always lands
    /// (writes are idempotent and generation-independent); a document that
    /// fails to parse is recorded as a failed fetch.
    pub fn supply(&mut self, _generation: u32, surah: u16, json: &str) {
        match document::parse(surah, json) {
            Ok(content) => self.cache.insert(surah, content),
            Err(_) => self.cache.mark_failed(surah),
        }
        self.settle(surah);
    }

    /// Report a failed fetch. Terminal for the surah; no retry.
    pub fn fail(&mut self, _generation: u32, surah: u16) {
        self.cache.mark_failed(surah);
        self.settle(surah);
    }

    fn settle(&mut self, surah: u16) {
        if let Some(cur) = &mut self.current {
            cur.missing.retain(|s| *s != surah);
        }
    }

    /// Take the assembled page once every surah spanned by the current
    /// request has resolved (ready or failed). Yields at most once per
    /// request; only the generation issued last can ever produce content.
    pub fn take_ready(&mut self) -> Option<PageContent> {
        let cur = self.current.as_ref()?;
        if cur.generation != self.generation || !cur.missing.is_empty() {
            return None;
        }
        let page = cur.page;
        self.current = None;
        Some(self.assemble(&page))
    }

    /// Assemble a page from whatever the cache holds. Surahs that failed
    /// (or were never fetched) contribute nothing; no placeholders are
    /// emitted for them.
    pub fn assemble(&self, page: &PageInfo) -> PageContent {
        let mut segments = Vec::new();
        for surah in page.start.surah..=page.end.surah {
            let Some(content) = self.cache.get(surah) else {
                continue;
            };
            let local_start = if surah == page.start.surah {
                page.start.ayah
            } else {
                1
            };
            let local_end = if surah == page.end.surah {
                page.end.ayah
            } else {
                meta::ayah_count(surah).unwrap_or(0)
            };

            if local_start == 1 {
                segments.push(Segment::SurahHeader {
                    surah,
                    name: content.name.clone(),
                });
            }
            for ayah in &content.ayahs {
                if ayah.number >= local_start && ayah.number <= local_end {
                    segments.push(Segment::Ayah {
                        surah,
                        number: ayah.number,
                        text: ayah.text.clone(),
                    });
                }
            }
        }
        PageContent {
            page_number: page.number,
            segments,
        }
    }

    /// Shared surah cache (read access).
    pub fn cache(&self) -> &SurahCache {
        &self.cache
    }

    /// Generation of the most recent request.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}
