use url::Url;

/// Returns the URL with its path forced to end in `/`
///
/// The query string and fragment are left untouched.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use link_validator::url::as_directory;
///
/// let url = Url::parse("https://example.com/search?q=test").unwrap();
/// assert_eq!(as_directory(&url).as_str(), "https://example.com/search/?q=test");
/// ```
pub fn as_directory(url: &Url) -> Url {
    let mut directory = url.clone();
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        directory.set_path(&path);
    }
    directory
}

/// Returns the URL with its last path segment removed
///
/// The resulting path always ends in `/`. The query string and fragment are
/// left untouched.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use link_validator::url::parent_directory;
///
/// let url = Url::parse("https://example.com/blog/post.html").unwrap();
/// assert_eq!(parent_directory(&url).as_str(), "https://example.com/blog/");
/// ```
pub fn parent_directory(url: &Url) -> Url {
    let mut parent = url.clone();
    let path = url.path();
    let parent_path = match path.rfind('/') {
        Some(index) => &path[..=index],
        None => "/",
    };
    parent.set_path(parent_path);
    parent
}

/// Returns the last segment of the URL path (empty for directory paths)
pub fn last_segment(url: &Url) -> &str {
    url.path().rsplit('/').next().unwrap_or("")
}

/// Returns the lowercased text after the final `.` of a path segment
///
/// Segments without a dot have no extension.
pub fn extension(segment: &str) -> Option<String> {
    segment
        .rfind('.')
        .map(|index| segment[index + 1..].to_lowercase())
}
