//! Selector-based querying over a parsed HTML document.
//!
//! Extractors only see the [`DocumentHandle`] trait and compiled [`Query`]
//! values, never `scraper` types directly.

use crate::error::{Error, Result};
use scraper::{ElementRef, Html, Selector};

/// A compiled CSS selector
#[derive(Debug, Clone)]
pub struct Query {
    css: String,
    selector: Selector,
}

impl Query {
    /// Compile a CSS selector (tag names, attribute presence, nesting, ...)
    pub fn parse(css: &str) -> Result<Self> {
        let selector = Selector::parse(css).map_err(|e| Error::InvalidSelector {
            selector: css.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            css: css.to_string(),
            selector,
        })
    }

    /// The selector text this query was compiled from
    pub fn as_str(&self) -> &str {
        &self.css
    }
}

/// The small set of queries extractors run against a document
pub trait DocumentHandle {
    /// Text of the first element matching `query`, in document order
    fn first_text(&self, query: &Query) -> Option<String>;

    /// Text of the first element matching `query` nested under any element matching `scope`
    fn first_text_within(&self, scope: &Query, query: &Query) -> Option<String>;

    /// Values of `attribute` on every element matching `query`, in document order.
    /// Elements without the attribute contribute nothing.
    fn attribute_values<'a>(&'a self, query: &Query, attribute: &str) -> Vec<&'a str>;
}

/// A parsed HTML document backed by `scraper`
///
/// Parsing is lenient: any input yields a document, malformed markup is
/// repaired the way browsers repair it.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse an HTML string
    pub fn parse(html: &str) -> Self {
        let html = Html::parse_document(html);
        if !html.errors.is_empty() {
            ::log::trace!("HTML parser recovered from {} errors", html.errors.len());
        }
        Self { html }
    }
}

/// Concatenates descendant text nodes in document order
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

impl DocumentHandle for Document {
    fn first_text(&self, query: &Query) -> Option<String> {
        self.html.select(&query.selector).next().map(element_text)
    }

    fn first_text_within(&self, scope: &Query, query: &Query) -> Option<String> {
        self.html
            .select(&scope.selector)
            .flat_map(|container| container.select(&query.selector))
            .next()
            .map(element_text)
    }

    fn attribute_values<'a>(&'a self, query: &Query, attribute: &str) -> Vec<&'a str> {
        self.html
            .select(&query.selector)
            .filter_map(|e| e.value().attr(attribute))
            .collect()
    }
}
