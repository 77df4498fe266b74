//! HTML parser for extracting link targets
//!
//! This module handles parsing HTML content to extract:
//! - The `<base href>` declared by the page, if any
//! - The raw `href` of every anchor, in document order
//!
//! Parsing is done with html5ever through `scraper`, which recovers from
//! malformed markup the way a browser does.

use scraper::{Html, Selector};

/// Raw link information extracted from an HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    /// The href of the first `<base>` element carrying one
    pub base_href: Option<String>,

    /// The href of every `<a>` element, in document order
    pub hrefs: Vec<String>,
}

/// Parses HTML content and extracts link targets
///
/// Hrefs are returned untouched; resolution and filtering happen later.
/// Anchors without an `href` contribute nothing. When an element repeats the
/// `href` attribute, the first occurrence wins.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
///
/// # Returns
///
/// The extracted base href and anchor hrefs
///
/// # Example
///
/// ```
/// use link_validator::crawler::parse_html;
///
/// let html = r#"<html><head><base href="/docs/"></head><body><a href="intro">Intro</a></body></html>"#;
/// let parsed = parse_html(html);
/// assert_eq!(parsed.base_href.as_deref(), Some("/docs/"));
/// assert_eq!(parsed.hrefs, vec!["intro".to_string()]);
/// ```
pub fn parse_html(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        base_href: find_base_href(&document),
        hrefs: anchor_hrefs(&document),
    }
}

/// Finds the href of the first `<base>` element anywhere in the document
fn find_base_href(document: &Html) -> Option<String> {
    let selector = Selector::parse("base[href]").ok()?;

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("href"))
        .map(str::to_string)
}

/// Collects the href of every anchor in document order
fn anchor_hrefs(document: &Html) -> Vec<String> {
    let selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}
