//! XML sitemap parsing
//!
//! Only `urlset` documents are accepted; sitemap indexes are rejected. Every
//! `<url>` contributes its `<loc>` text, empty when the element is empty or
//! missing.

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Urlset {
    #[serde(default)]
    url: Vec<UrlEntry>,
}

#[derive(Debug, Deserialize)]
struct UrlEntry {
    #[serde(default)]
    loc: String,
}

/// Extracts `urlset/url/loc` values from a sitemap document
///
/// # Arguments
///
/// * `xml` - The sitemap body
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Loc values in document order, entities unescaped
/// * `Err(String)` - The document is malformed or its root is not `urlset`
///
/// Whitespace around plain loc text is dropped by the XML deserializer;
/// CDATA content is returned unchanged.
///
/// # Example
///
/// ```
/// use link_validator::crawler::parse_sitemap;
///
/// let xml = r#"<?xml version="1.0"?>
/// <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
///   <url><loc>https://example.com/</loc></url>
///   <url><loc/></url>
/// </urlset>"#;
/// assert_eq!(
///     parse_sitemap(xml).unwrap(),
///     vec!["https://example.com/".to_string(), String::new()]
/// );
/// ```
pub fn parse_sitemap(xml: &str) -> Result<Vec<String>, String> {
    let root = root_element(xml)?;
    if root != "urlset" {
        return Err(format!("expected root element 'urlset', found '{}'", root));
    }

    let urlset: Urlset = quick_xml::de::from_str(xml).map_err(|e| e.to_string())?;
    Ok(urlset.url.into_iter().map(|entry| entry.loc).collect())
}

/// Local name of the first element in the document
fn root_element(xml: &str) -> Result<String, String> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.local_name().as_ref()).into_owned())
            }
            Ok(Event::Eof) => return Err("document has no root element".to_string()),
            Ok(_) => {}
            Err(e) => {
                return Err(format!(
                    "XML error at position {}: {}",
                    reader.buffer_position(),
                    e
                ))
            }
        }
    }
}
