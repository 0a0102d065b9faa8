//! Printing collected issues

use crate::exit_codes::{EXIT_CRITICAL, EXIT_ERROR, EXIT_SUCCESS};
use aboutcode_common::{Issue, IssueCounts, Severity};
use aboutcode_model::About;

/// Issues at or above `min_severity`, most severe first.
pub fn visible_issues(issues: &[Issue], min_severity: Severity) -> Vec<&Issue> {
    let mut visible: Vec<&Issue> = issues
        .iter()
        .filter(|issue| issue.severity >= min_severity)
        .collect();
    visible.sort_by(|a, b| b.severity.cmp(&a.severity));
    visible
}

/// Inventory issues with each record's own issues prefixed by its
/// `about_file_path`.
///
/// Record issues appear in the inventory in record order, possibly
/// interleaved with traversal issues, which are kept as they are.
pub fn locate_issues(issues: &[Issue], abouts: &[About]) -> Vec<Issue> {
    let mut pending = abouts
        .iter()
        .flat_map(|about| {
            let path = about.about_file_path().unwrap_or_default();
            about.errors().iter().map(move |issue| (path, issue))
        })
        .peekable();

    issues
        .iter()
        .map(|issue| match pending.peek() {
            Some((path, own)) if *own == issue => {
                let located = Issue::new(issue.severity, format!("{}: {}", path, issue.message));
                pending.next();
                located
            }
            _ => issue.clone(),
        })
        .collect()
}

/// Print the visible issues, one per line.
pub fn print_issues(issues: &[Issue], min_severity: Severity) {
    for issue in visible_issues(issues, min_severity) {
        println!("{}", issue);
    }
}

/// Count lines for every severity, most severe first.
pub fn summary_lines(issues: &[Issue]) -> Vec<String> {
    let counts = IssueCounts::from_issues(issues);
    Severity::ALL
        .iter()
        .rev()
        .map(|severity| format!("{}: {}", severity, counts.get(*severity)))
        .collect()
}

pub fn print_summary(issues: &[Issue]) {
    println!("Issues by severity:");
    for line in summary_lines(issues) {
        println!("  {}", line);
    }
}

/// 2 for any CRITICAL issue, 1 for any ERROR, else 0.
pub fn exit_code_for(issues: &[Issue]) -> i32 {
    match IssueCounts::from_issues(issues).highest() {
        Some(Severity::Critical) => EXIT_CRITICAL,
        Some(Severity::Error) => EXIT_ERROR,
        _ => EXIT_SUCCESS,
    }
}
