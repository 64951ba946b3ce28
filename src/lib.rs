//! Crawl-ready data extraction from fetched HTML pages.
//!
//! Two entry points are consumed by a surrounding crawler:
//! [`normalize`] turns a URL into a dedup key, and [`extract_page_data`]
//! turns one fetched page into a [`PageData`] record. Extraction never
//! fails; missing or malformed content degrades to empty fields.

pub mod config;
pub mod error;
pub mod normalizer;
pub mod parsers;
pub mod results;

// Re-export commonly used types for convenience
pub use config::ExtractorConfig;
pub use error::{Error, Result};
pub use normalizer::normalize;
pub use parsers::{
    PageExtractor, default_extractor, extract_page_data, get_first_paragraph, get_h1, get_images,
    get_urls,
};
pub use results::PageData;
