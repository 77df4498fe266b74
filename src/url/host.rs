use url::Url;

/// Returns the host and explicit port of a URL as a single comparison key
///
/// The URL parser already lowercases ASCII hosts and drops default ports, so
/// two URLs share a key exactly when they name the same host and port.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use link_validator::url::host_key;
///
/// let url = Url::parse("http://127.0.0.1:8080/path").unwrap();
/// assert_eq!(host_key(&url), Some("127.0.0.1:8080".to_string()));
///
/// let url = Url::parse("https://example.com:443/").unwrap();
/// assert_eq!(host_key(&url), Some("example.com".to_string()));
/// ```
pub fn host_key(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

/// Returns true if both URLs have exactly the same host key
///
/// Subdomains and URLs without a host never match.
pub fn is_same_host(candidate: &Url, site: &Url) -> bool {
    match (host_key(candidate), host_key(site)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
