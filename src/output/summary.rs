//! Console report of a link check run

use crate::checker::LinkResult;
use crate::output::status_glyph;
use serde::Serialize;

/// Summary of a completed check run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Number of URLs checked
    pub total_links_checked: usize,

    /// Results considered broken, in check order
    pub broken_links: Vec<LinkResult>,
}

impl Report {
    /// Builds a report from check results
    pub fn from_results(results: &[LinkResult]) -> Self {
        Self {
            total_links_checked: results.len(),
            broken_links: results.iter().filter(|r| r.is_broken()).cloned().collect(),
        }
    }

    pub fn broken_count(&self) -> usize {
        self.broken_links.len()
    }

    pub fn has_broken_links(&self) -> bool {
        !self.broken_links.is_empty()
    }

    /// The broken links as a compact JSON array
    pub fn broken_links_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.broken_links)
    }

    /// Renders the human-readable summary
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("\n=== Link Check Results ===\n");
        out.push_str(&format!("Total links checked: {}\n", self.total_links_checked));
        out.push_str(&format!("Broken links found: {}\n", self.broken_count()));

        if self.has_broken_links() {
            out.push_str("\n=== Broken Links ===\n");
            for link in &self.broken_links {
                out.push_str(&format!(
                    "{} {} (Status: {}) - {}\n",
                    status_glyph(link.status_code),
                    link.url,
                    link.status_code,
                    link.error.as_deref().unwrap_or("")
                ));
            }
        } else {
            out.push_str("✅ No broken links found!\n");
        }

        out
    }
}

/// Prints the report to stdout
pub fn print_report(report: &Report) {
    print!("{}", report.render());
}
