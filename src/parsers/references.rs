//! Resolution of `href`/`src` references to absolute URLs.

use crate::normalizer::has_bare_authority;
use crate::parsers::document::{DocumentHandle, Query};
use url::{Position, Url};

/// Resolves a raw attribute value against `base`
///
/// Returns `None` for empty values and for values that cannot be parsed as
/// a URL reference. Absolute references pass through; relative ones are
/// merged with the base.
pub fn resolve_reference(raw: &str, base: &Url) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match base.join(trimmed) {
        Ok(resolved) => Some(serialize_resolved(&resolved, trimmed)),
        Err(e) => {
            ::log::debug!("Skipping unparseable reference {:?}: {}", trimmed, e);
            None
        }
    }
}

/// Serializes a resolved URL without the root path the parser adds to
/// `scheme://host` and `//host` references written with no path
fn serialize_resolved(resolved: &Url, reference: &str) -> String {
    if resolved.path() == "/" && has_bare_authority(reference) {
        format!(
            "{}{}",
            &resolved[..Position::BeforePath],
            &resolved[Position::AfterPath..]
        )
    } else {
        resolved.to_string()
    }
}

/// Resolves the `attribute` of every element matching `query`, in document order
///
/// Malformed or empty values are skipped without affecting the rest.
/// Duplicates are kept.
pub fn resolve_all<D: DocumentHandle + ?Sized>(
    doc: &D,
    query: &Query,
    attribute: &str,
    base: &Url,
) -> Vec<String> {
    let resolved = doc
        .attribute_values(query, attribute)
        .into_iter()
        .filter_map(|raw| resolve_reference(raw, base))
        .collect::<Vec<String>>();

    ::log::debug!(
        "Resolved {} references from {}[{}]",
        resolved.len(),
        query.as_str(),
        attribute
    );
    resolved
}
