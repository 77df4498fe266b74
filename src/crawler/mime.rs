//! MIME type classification
//!
//! Decides whether a Content-Type names a leaf resource (a file, whose
//! relative links resolve against the parent directory) or a navigable page
//! (whose relative links resolve beneath the URL itself).

/// Whether a URL behaves like a file or a directory for link resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    File,
    Directory,
}

/// MIME types treated as navigable pages
const DIRECTORY_TYPES: &[&str] = &[
    "text/html",
    "application/xhtml+xml",
    "text/plain",
    "application/json",
    "application/xml",
    "text/xml",
    "application/ld+json",
    "application/rss+xml",
    "application/atom+xml",
];

/// MIME types treated as leaf resources
const FILE_TYPES: &[&str] = &[
    // Documents
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "application/rtf",
    "text/csv",
    // Archives
    "application/zip",
    "application/x-rar-compressed",
    "application/vnd.rar",
    "application/x-7z-compressed",
    "application/x-tar",
    "application/gzip",
    "application/x-gzip",
    "application/x-bzip2",
    // Images
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/bmp",
    "image/tiff",
    "image/x-icon",
    "image/vnd.microsoft.icon",
    "image/svg+xml",
    // Audio
    "audio/mpeg",
    "audio/wav",
    "audio/ogg",
    "audio/aac",
    "audio/flac",
    // Video
    "video/mp4",
    "video/mpeg",
    "video/quicktime",
    "video/x-msvideo",
    "video/webm",
    // Fonts
    "font/woff",
    "font/woff2",
    "font/ttf",
    "font/otf",
    "application/font-woff",
    "application/font-woff2",
    "application/vnd.ms-fontobject",
    // Scripts, styles and binaries
    "application/octet-stream",
    "text/css",
    "application/javascript",
    "text/javascript",
];

/// Classifies a normalized MIME type
///
/// The input must already be stripped of parameters and lowercased (see
/// [`content_type_essence`]). Unknown and empty types are treated as
/// directories.
///
/// # Examples
///
/// ```
/// use link_validator::crawler::{classify_mime, ResourceKind};
///
/// assert_eq!(classify_mime("application/pdf"), ResourceKind::File);
/// assert_eq!(classify_mime("text/html"), ResourceKind::Directory);
/// assert_eq!(classify_mime("application/x-unknown"), ResourceKind::Directory);
/// ```
pub fn classify_mime(mime: &str) -> ResourceKind {
    if DIRECTORY_TYPES.contains(&mime) {
        return ResourceKind::Directory;
    }

    if FILE_TYPES.contains(&mime) {
        return ResourceKind::File;
    }

    ResourceKind::Directory
}

/// Reduces a raw Content-Type header to its lowercased essence
///
/// `"Text/HTML; charset=utf-8"` becomes `"text/html"`.
pub fn content_type_essence(header: &str) -> String {
    header
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase()
}
