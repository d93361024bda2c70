//! Validation report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::Style;

use crate::logger::paint;
use crate::utils::plural_s;

/// A single validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The script block or object that failed, e.g. `script #2 (WebPage)`.
    pub target: String,
    /// Error reason/message.
    pub reason: String,
}

/// Validation errors grouped by source (route path or file).
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub sources: BTreeMap<String, Vec<ValidationError>>,
    /// Number of JSON-LD objects checked.
    pub checked: usize,
}

impl ValidationReport {
    /// Record the errors of one source. Clean sources are only counted.
    pub fn add(&mut self, source: String, checked: usize, errors: Vec<ValidationError>) {
        self.checked += checked;
        if !errors.is_empty() {
            self.sources.entry(source).or_default().extend(errors);
        }
    }

    /// Count of sources with errors.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Total error count.
    pub fn error_count(&self) -> usize {
        self.sources.values().map(Vec::len).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.sources.is_empty()
    }

    /// Print the full report to stderr.
    pub fn print(&self) {
        if self.sources.is_empty() {
            return;
        }
        eprintln!();

        let source_count = self.source_count();
        let error_count = self.error_count();

        eprintln!(
            "{} {}",
            paint("json-ld", Style::new().red().bold()),
            paint(
                format_args!(
                    "({source_count} source{}, {error_count} error{})",
                    plural_s(source_count),
                    plural_s(error_count)
                ),
                Style::new().dimmed()
            )
        );

        for (source, errs) in &self.sources {
            eprintln!(
                "{}{}{}",
                paint("[", Style::new().dimmed()),
                paint(source, Style::new().cyan()),
                paint("]", Style::new().dimmed())
            );
            for e in errs {
                eprintln!("{} {} {}", paint("→", Style::new().red()), e.target, e.reason);
            }
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.error_count();

        if total == 0 {
            write!(f, "{}", paint("all checks passed", Style::new().green()))
        } else {
            write!(
                f,
                "{} {} {}",
                paint("found", Style::new().dimmed()),
                paint(total, Style::new().red().bold()),
                paint(format_args!("error{}", plural_s(total)), Style::new().dimmed())
            )
        }
    }
}
