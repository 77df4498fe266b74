//! URL handling module for the link validator
//!
//! This module provides href resolution, exclude-pattern filtering, same-host
//! comparison and the path surgery used when computing resolution bases.

mod exclude;
mod host;
mod path;
mod resolve;

// Re-export main functions
pub use exclude::ExcludePatterns;
pub use host::{host_key, is_same_host};
pub use path::{as_directory, extension, last_segment, parent_directory};
pub use resolve::resolve_url;
