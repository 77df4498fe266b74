//! GitHub Actions step outputs
//!
//! Outputs are appended to the file named by `GITHUB_OUTPUT`. Outside of
//! Actions the variable is unset and nothing is written.

use crate::output::summary::Report;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

const HEREDOC_DELIMITER: &str = "EOF";

/// Formats one output entry
///
/// Single-line values use `name=value`; multi-line values use the heredoc
/// form `name<<EOF`.
pub fn format_output(name: &str, value: &str) -> String {
    if value.contains('\n') {
        format!(
            "{}<<{}\n{}\n{}\n",
            name, HEREDOC_DELIMITER, value, HEREDOC_DELIMITER
        )
    } else {
        format!("{}={}\n", name, value)
    }
}

/// Writes the report outputs when running inside GitHub Actions
///
/// # Returns
///
/// * `Ok(true)` - Outputs were written
/// * `Ok(false)` - `GITHUB_OUTPUT` is not set
/// * `Err(std::io::Error)` - The output file could not be written
pub fn write_github_outputs(report: &Report) -> std::io::Result<bool> {
    match std::env::var_os("GITHUB_OUTPUT").filter(|v| !v.is_empty()) {
        Some(path) => {
            write_outputs_to(Path::new(&path), report)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Appends `total-links-checked`, `broken-links-count` and `broken-links`
pub fn write_outputs_to(path: &Path, report: &Report) -> std::io::Result<()> {
    let broken_json = report
        .broken_links_json()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let mut content = String::new();
    content.push_str(&format_output(
        "total-links-checked",
        &report.total_links_checked.to_string(),
    ));
    content.push_str(&format_output(
        "broken-links-count",
        &report.broken_count().to_string(),
    ));
    content.push_str(&format_output("broken-links", &broken_json));

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(content.as_bytes())?;
    tracing::debug!("Wrote GitHub outputs to {}", path.display());
    Ok(())
}
