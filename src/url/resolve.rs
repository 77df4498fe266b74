use url::{ParseError, Url};

/// Schemes that never produce a fetchable link
const IGNORED_SCHEMES: &[&str] = &["javascript:", "mailto:"];

/// Resolves an href against a base URL
///
/// # Resolution Rules
///
/// 1. Empty hrefs and fragment-only hrefs (`#...`) are dropped
/// 2. `javascript:` and `mailto:` hrefs are dropped
/// 3. Hrefs that are not valid URL references are dropped
/// 4. Everything else is resolved with standard reference resolution:
///    - relative paths and `..` segments are applied to the base path
///    - protocol-relative `//host/path` adopts the base scheme
///    - absolute URLs pass through, whatever their scheme
///
/// # Arguments
///
/// * `href` - The raw href attribute value
/// * `base` - The effective resolution base of the page
///
/// # Returns
///
/// * `Some(String)` - The absolute URL
/// * `None` - The href should not be followed
///
/// # Examples
///
/// ```
/// use url::Url;
/// use link_validator::url::resolve_url;
///
/// let base = Url::parse("https://example.com/path/").unwrap();
/// assert_eq!(
///     resolve_url("../parent", &base),
///     Some("https://example.com/parent".to_string())
/// );
/// assert_eq!(
///     resolve_url("//other.com/path", &base),
///     Some("https://other.com/path".to_string())
/// );
/// assert_eq!(resolve_url("#top", &base), None);
/// ```
pub fn resolve_url(href: &str, base: &Url) -> Option<String> {
    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if IGNORED_SCHEMES
        .iter()
        .any(|scheme| href.starts_with(scheme))
    {
        return None;
    }

    if !is_valid_reference(href) {
        return None;
    }

    base.join(href).ok().map(|resolved| resolved.to_string())
}

/// Checks that an href parses as either an absolute URL or a relative reference
///
/// A relative reference may not carry a colon in its first path segment; such
/// an href is a malformed scheme (e.g. `ht tp://host`) rather than a path.
fn is_valid_reference(href: &str) -> bool {
    match Url::parse(href) {
        Ok(_) => true,
        Err(ParseError::RelativeUrlWithoutBase) => {
            let first_segment = href
                .split(|c| matches!(c, '/' | '?' | '#'))
                .next()
                .unwrap_or("");
            !first_segment.contains(':')
        }
        Err(_) => false,
    }
}
