use crate::error::Result;
use url::Url;

/// Produces the dedup key for a URL: host (plus explicit port) followed by path.
///
/// Scheme, query string and fragment are dropped so that `http`/`https`
/// variants and tracking parameters collapse to one key. The path is kept
/// as written: a trailing slash stays, and none is added when the input
/// has no path at all.
///
/// Only absolute URLs are accepted; input without a scheme (including the
/// empty string) fails with [`Error::UrlParse`](crate::Error::UrlParse).
pub fn normalize(raw_url: &str) -> Result<String> {
    let url = Url::parse(raw_url)?;

    let mut key = String::from(url.host_str().unwrap_or_default());
    if let Some(port) = url.port() {
        key.push(':');
        key.push_str(&port.to_string());
    }
    // Special schemes report "/" for an empty path
    if !(url.path() == "/" && has_bare_authority(raw_url)) {
        key.push_str(url.path());
    }

    ::log::trace!("Normalized {} -> {}", raw_url, key);
    Ok(key)
}

/// Whether `raw` names an authority (`scheme://host` or `//host`) with no path after it
pub(crate) fn has_bare_authority(raw: &str) -> bool {
    let raw = raw.trim();
    let Some(start) = raw.find("//") else {
        return false;
    };

    let prefix = &raw[..start];
    let is_scheme = prefix.strip_suffix(':').is_some_and(|scheme| {
        scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    });
    if !prefix.is_empty() && !is_scheme {
        return false;
    }

    let authority = &raw[start + 2..];
    !authority
        .find(['/', '\\', '?', '#'])
        .is_some_and(|end| matches!(authority.as_bytes()[end], b'/' | b'\\'))
}
