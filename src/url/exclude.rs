use crate::ConfigError;
use regex::Regex;

/// Compiled set of URL exclude patterns
///
/// Patterns are compiled once from configuration and never change during a
/// run. A URL is excluded when any pattern matches anywhere in it.
#[derive(Debug, Clone, Default)]
pub struct ExcludePatterns {
    patterns: Vec<Regex>,
}

impl ExcludePatterns {
    /// Compiles a list of regular expressions
    ///
    /// Blank entries are skipped.
    ///
    /// # Arguments
    ///
    /// * `sources` - The pattern strings, in configuration order
    ///
    /// # Returns
    ///
    /// * `Ok(ExcludePatterns)` - All patterns compiled
    /// * `Err(ConfigError::InvalidPattern)` - A pattern failed to compile
    ///
    /// # Examples
    ///
    /// ```
    /// use link_validator::url::ExcludePatterns;
    ///
    /// let patterns = ExcludePatterns::compile(&[r".*\.pdf$".to_string()]).unwrap();
    /// assert!(patterns.is_excluded("https://example.com/file.pdf"));
    /// assert!(!patterns.is_excluded("https://example.com/page.html"));
    /// ```
    pub fn compile<S: AsRef<str>>(sources: &[S]) -> Result<Self, ConfigError> {
        let mut patterns = Vec::with_capacity(sources.len());

        for source in sources {
            let source = source.as_ref().trim();
            if source.is_empty() {
                continue;
            }

            let regex = Regex::new(source)
                .map_err(|e| ConfigError::InvalidPattern(format!("'{}': {}", source, e)))?;
            patterns.push(regex);
        }

        Ok(Self { patterns })
    }

    /// Returns true if any pattern matches the URL
    pub fn is_excluded(&self, url: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(url))
    }

    /// Number of compiled patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
