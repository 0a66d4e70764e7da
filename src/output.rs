//! CLI output formatting for `build` and `check`.
//!
//! Output is information-first: each line leads with the quiz's position in
//! the index and its title, followed by `→` and the file it produced.
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! 001 HTML → html.html
//! 002 CSS (skipped: no valid questions to display)
//! 003 JS (failed: IO error on dist/js.html: permission denied)
//!
//! Generated 1 page, 1 skipped, 1 failed
//! ```
//!
//! ## Check
//!
//! ```text
//! 001 HTML
//!     Source: html.json
//! 002 CSS
//!     Source: css.json
//!
//! 2 valid quizzes
//! ```
//!
//! Each `format_*` function is pure and returns lines for testability; the
//! `print_*` wrappers write them to stdout.

use crate::generate::PageOutcome;
use crate::pipeline::BuildReport;
use crate::types::ValidatedEntry;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Path relative to the output root, for display.
fn display_path(path: &Path, output_root: &Path) -> String {
    path.strip_prefix(output_root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn outcome_line(label: &str, outcome: &PageOutcome, output_root: &Path) -> String {
    match outcome {
        PageOutcome::Written { path, .. } => {
            format!("{} \u{2192} {}", label, display_path(path, output_root))
        }
        PageOutcome::Skipped { reason, .. } => format!("{} (skipped: {})", label, reason),
        PageOutcome::Failed { error, .. } => format!("{} (failed: {})", label, error),
    }
}

/// Format the result of a completed build.
pub fn format_build_output(report: &BuildReport, output_root: &Path) -> Vec<String> {
    let mut lines = vec![outcome_line("Home", &report.index, output_root)];

    for (i, page) in report.pages.iter().enumerate() {
        let label = format!("{} {}", format_index(i + 1), page.title());
        lines.push(outcome_line(&label, page, output_root));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {} skipped, {} failed",
        plural(report.pages_written(), "page", "pages"),
        report.pages_skipped(),
        report.pages_failed()
    ));
    lines
}

/// Print build output to stdout.
pub fn print_build_output(report: &BuildReport, output_root: &Path) {
    for line in format_build_output(report, output_root) {
        println!("{}", line);
    }
}

/// Format the entries that survived validation and the existence filter.
pub fn format_check_output(entries: &[ValidatedEntry]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), entry.title()));
        lines.push(format!("    Source: {}", entry.file()));
    }
    lines.push(String::new());
    lines.push(plural(entries.len(), "valid quiz", "valid quizzes"));
    lines
}

/// Print check output to stdout.
pub fn print_check_output(entries: &[ValidatedEntry]) {
    for line in format_check_output(entries) {
        println!("{}", line);
    }
}
