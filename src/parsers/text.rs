/// Options applied to text pulled out of the document
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    /// Whether to collapse runs of whitespace into single spaces and trim the ends
    pub collapse_whitespace: bool,
}

/// Applies the text options to flattened element text
///
/// Without collapsing, text is returned exactly as the document holds it.
pub fn finish_text(text: String, options: &TextOptions) -> String {
    if options.collapse_whitespace {
        collapse_whitespace(&text)
    } else {
        text
    }
}

/// Collapses whitespace runs within a segment of text
pub fn collapse_whitespace(segment: &str) -> String {
    segment.split_whitespace().collect::<Vec<_>>().join(" ")
}
