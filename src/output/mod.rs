//! Output module for reporting link check results
//!
//! This module handles:
//! - Summarizing check results into a report
//! - Printing the report to the console, as text or JSON
//! - Publishing results as GitHub Actions step outputs

mod github;
mod summary;

pub use github::{format_output, write_github_outputs, write_outputs_to};
pub use summary::{print_report, Report};

/// Returns the glyph shown next to a status code in progress and reports
///
/// # Examples
///
/// ```
/// use link_validator::output::status_glyph;
///
/// assert_eq!(status_glyph(200), "✅");
/// assert_eq!(status_glyph(404), "❌");
/// assert_eq!(status_glyph(0), "❓");
/// ```
pub fn status_glyph(status_code: u16) -> &'static str {
    match status_code {
        200..=299 => "✅",
        300..=399 => "🔄",
        400..=499 => "❌",
        500..=u16::MAX => "💥",
        _ => "❓",
    }
}
