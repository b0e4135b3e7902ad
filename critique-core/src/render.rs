//! Report rendering for console and JSON output

use std::fmt::Write as _;

use crate::feedback::{FileReport, Outcome};
use crate::Result;

/// Render reports as human-readable text
///
/// One block per file, findings indented underneath, a summary line at the
/// end. Deterministic for a given report list.
pub fn render_text(reports: &[FileReport]) -> String {
    let mut out = String::new();

    let mut total_issues = 0usize;
    let mut failed_files = 0usize;

    for report in reports {
        match &report.outcome {
            Outcome::Reviewed { feedback } => {
                let _ = writeln!(out, "{}: {}", report.path.display(), feedback.message);

                for issue in &feedback.issues {
                    total_issues += 1;

                    let location = match (issue.line, issue.col) {
                        (Some(line), Some(col)) => format!("{}:{}", line, col),
                        (Some(line), None) => format!("{}", line),
                        _ => "-".to_string(),
                    };

                    let _ = writeln!(
                        out,
                        "  [{}] {} ({}) at {}",
                        issue.severity,
                        issue.description(),
                        issue.kind,
                        location
                    );

                    if let Some(ref fix) = issue.suggested_fix {
                        let _ = writeln!(out, "      fix: {}", fix);
                    }
                }

                if feedback.is_clean() {
                    let _ = writeln!(out, "  no issues found");
                }
            }
            Outcome::Failed { error } => {
                failed_files += 1;
                let _ = writeln!(out, "error: {}: {}", report.path.display(), error);
            }
        }

        let _ = writeln!(out);
    }

    let _ = writeln!(
        out,
        "{} file(s) reviewed, {} issue(s), {} error(s)",
        reports.len() - failed_files,
        total_issues,
        failed_files
    );

    out
}

/// Render reports as a JSON array
pub fn render_json(reports: &[FileReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{Feedback, Issue, Severity};

    fn sample_reports() -> Vec<FileReport> {
        vec![
            FileReport::reviewed(
                "app/main.py",
                Feedback {
                    success: true,
                    message: "Analysis complete".to_string(),
                    issues: vec![Issue {
                        kind: "mutable_default_argument".to_string(),
                        severity: Severity::High,
                        line: Some(3),
                        col: Some(0),
                        message: Some(
                            "Function 'f' has a mutable default argument (list/dict/set)."
                                .to_string(),
                        ),
                        details: None,
                        suggested_fix: Some("Use None as the default.".to_string()),
                    }],
                },
            ),
            FileReport::reviewed(
                "app/ok.py",
                Feedback {
                    success: true,
                    message: "Analysis complete".to_string(),
                    issues: vec![],
                },
            ),
            FileReport::failed("missing.py", "failed to read missing.py"),
        ]
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample_reports());

        assert!(text.contains("app/main.py: Analysis complete"));
        assert!(text.contains("[high]"));
        assert!(text.contains("mutable_default_argument"));
        assert!(text.contains("at 3:0"));
        assert!(text.contains("fix: Use None as the default."));
        assert!(text.contains("no issues found"));
        assert!(text.contains("error: missing.py: failed to read missing.py"));
        assert!(text.contains("2 file(s) reviewed, 1 issue(s), 1 error(s)"));
    }

    #[test]
    fn test_render_text_deterministic() {
        let reports = sample_reports();
        assert_eq!(render_text(&reports), render_text(&reports));
    }

    #[test]
    fn test_render_empty() {
        let text = render_text(&[]);
        assert!(text.contains("0 file(s) reviewed, 0 issue(s), 0 error(s)"));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&sample_reports()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["status"], "reviewed");
        assert_eq!(entries[0]["feedback"]["issues"][0]["type"], "mutable_default_argument");
        assert_eq!(entries[2]["status"], "failed");
    }
}
