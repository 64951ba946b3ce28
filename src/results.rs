use serde::{Deserialize, Serialize};

/// Facts extracted from a single fetched HTML document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageData {
    /// Source URL of the page, exactly as supplied
    pub url: String,

    /// Text of the first `h1` (empty if none)
    pub h1: String,

    /// Text of the representative paragraph (empty if none)
    pub first_paragraph: String,

    /// Absolute link targets in document order
    pub outgoing_links: Vec<String>,

    /// Absolute image sources in document order
    pub image_urls: Vec<String>,
}

impl PageData {
    /// Create a new page data instance
    pub fn new(
        url: String,
        h1: String,
        first_paragraph: String,
        outgoing_links: Vec<String>,
        image_urls: Vec<String>,
    ) -> Self {
        Self {
            url,
            h1,
            first_paragraph,
            outgoing_links,
            image_urls,
        }
    }

    /// Create a page data instance carrying text only (no links or images)
    pub fn without_references(url: String, h1: String, first_paragraph: String) -> Self {
        Self::new(url, h1, first_paragraph, Vec::new(), Vec::new())
    }
}
