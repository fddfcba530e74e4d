//! # APOD Module
//!
//! Everything needed to turn one APOD page into a wallpaper on disk.
//!
//! ```text
//! FetchPipeline
//!     ├── CacheStore      (management) skip / page snapshot / raw image cleanup
//!     ├── ResourceFetcher  tagged GET requests, streamed picture download
//!     ├── PageIndexer      picture link + caption extraction
//!     └── Compositor       resize, letterbox and caption overlay
//! ```
//!
//! Pages are requested from two endpoints below the configured base URL:
//! `astropix.html` for today's picture and `ap<YYMMDD>.html` for a given day.

mod fetcher;
mod page;
mod pipeline;

pub use fetcher::ResourceFetcher;
pub use page::PageIndexer;
pub use page::caption_text;
pub use page::image_href;
pub use pipeline::FetchPipeline;
