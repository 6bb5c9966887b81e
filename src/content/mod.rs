//! Content loading: surah documents, the per-surah cache, and the
//! cancellable page loader

mod cache;
mod document;
mod loader;

pub use cache::{Slot, SurahCache};
pub use document::{parse, Ayah, DocumentError, SurahContent};
pub use loader::{PageContent, PageLoader, PageRequest, Segment};
