pub mod content;
pub mod document;
pub mod references;
pub mod text;

#[cfg(test)]
mod tests;

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::results::PageData;
use document::{Document, DocumentHandle, Query};
use std::sync::LazyLock;
use text::TextOptions;
use url::Url;

/// Extractor with the default rules, compiled once and shared by the free functions
static DEFAULT_EXTRACTOR: LazyLock<PageExtractor> = LazyLock::new(PageExtractor::default);

/// Compiled extraction rules, reusable across any number of pages
///
/// Holds no per-page state: every call parses its own document and returns
/// a freshly built [`PageData`].
#[derive(Debug, Clone)]
pub struct PageExtractor {
    title: Query,
    landmark: Query,
    paragraph: Query,
    links: Query,
    link_attribute: String,
    images: Query,
    image_attribute: String,
    text_options: TextOptions,
}

impl PageExtractor {
    /// Creates an extractor from configuration, compiling its selectors
    pub fn new(config: &ExtractorConfig) -> Result<Self> {
        Ok(Self {
            title: Query::parse(&config.title_selector)?,
            landmark: Query::parse(&config.landmark_selector)?,
            paragraph: Query::parse(&config.paragraph_selector)?,
            links: Query::parse(&config.link_selector)?,
            link_attribute: config.link_attribute.clone(),
            images: Query::parse(&config.image_selector)?,
            image_attribute: config.image_attribute.clone(),
            text_options: TextOptions {
                collapse_whitespace: config.collapse_whitespace,
            },
        })
    }

    /// Extracts page data from `html` fetched from `page_url`
    ///
    /// Never fails. When `page_url` cannot serve as a base URL the text
    /// fields are still filled and links/images are left empty.
    pub fn extract(&self, html: &str, page_url: &str) -> PageData {
        let doc = Document::parse(html);

        let h1 = self.title(&doc);
        let first_paragraph = self.first_paragraph(&doc);

        let base = match Url::parse(page_url) {
            Ok(base) => base,
            Err(e) => {
                ::log::debug!("Cannot use {:?} as base URL: {}", page_url, e);
                return PageData::without_references(page_url.to_string(), h1, first_paragraph);
            }
        };

        let outgoing_links = self.links(&doc, &base);
        let image_urls = self.images(&doc, &base);

        ::log::debug!(
            "Extracted {}: {} links, {} images",
            page_url,
            outgoing_links.len(),
            image_urls.len()
        );

        PageData::new(
            page_url.to_string(),
            h1,
            first_paragraph,
            outgoing_links,
            image_urls,
        )
    }

    /// Title text of a parsed document
    pub fn title<D: DocumentHandle + ?Sized>(&self, doc: &D) -> String {
        content::extract_title(doc, &self.title, &self.text_options)
    }

    /// Representative paragraph of a parsed document
    pub fn first_paragraph<D: DocumentHandle + ?Sized>(&self, doc: &D) -> String {
        content::extract_first_paragraph(doc, &self.landmark, &self.paragraph, &self.text_options)
    }

    /// Absolute link targets of a parsed document
    pub fn links<D: DocumentHandle + ?Sized>(&self, doc: &D, base: &Url) -> Vec<String> {
        references::resolve_all(doc, &self.links, &self.link_attribute, base)
    }

    /// Absolute image sources of a parsed document
    pub fn images<D: DocumentHandle + ?Sized>(&self, doc: &D, base: &Url) -> Vec<String> {
        references::resolve_all(doc, &self.images, &self.image_attribute, base)
    }
}

impl Default for PageExtractor {
    fn default() -> Self {
        Self::new(&ExtractorConfig::default()).expect("Default selectors should be valid")
    }
}

/// The shared extractor with the default rules
pub fn default_extractor() -> &'static PageExtractor {
    &DEFAULT_EXTRACTOR
}

/// Extracts page data using the default rules
pub fn extract_page_data(html: &str, page_url: &str) -> PageData {
    default_extractor().extract(html, page_url)
}

/// Text of the first `h1` in `html`
pub fn get_h1(html: &str) -> String {
    default_extractor().title(&Document::parse(html))
}

/// Representative paragraph of `html`
pub fn get_first_paragraph(html: &str) -> String {
    default_extractor().first_paragraph(&Document::parse(html))
}

/// Absolute link targets in `html`, resolved against `base`
pub fn get_urls(html: &str, base: &Url) -> Vec<String> {
    default_extractor().links(&Document::parse(html), base)
}

/// Absolute image sources in `html`, resolved against `base`
pub fn get_images(html: &str, base: &Url) -> Vec<String> {
    default_extractor().images(&Document::parse(html), base)
}
