//! Title and primary-paragraph extraction.

use crate::parsers::document::{DocumentHandle, Query};
use crate::parsers::text::{TextOptions, finish_text};

/// Text of the first title element, or an empty string when there is none
pub fn extract_title<D: DocumentHandle + ?Sized>(
    doc: &D,
    title: &Query,
    options: &TextOptions,
) -> String {
    doc.first_text(title)
        .map(|text| finish_text(text, options))
        .unwrap_or_default()
}

/// Text of the representative paragraph
///
/// The first paragraph inside the landmark wins; otherwise the first
/// paragraph anywhere in the document; otherwise an empty string.
pub fn extract_first_paragraph<D: DocumentHandle + ?Sized>(
    doc: &D,
    landmark: &Query,
    paragraph: &Query,
    options: &TextOptions,
) -> String {
    doc.first_text_within(landmark, paragraph)
        .or_else(|| {
            ::log::trace!(
                "No {} inside {}, falling back to first {} in document",
                paragraph.as_str(),
                landmark.as_str(),
                paragraph.as_str()
            );
            doc.first_text(paragraph)
        })
        .map(|text| finish_text(text, options))
        .unwrap_or_default()
}
