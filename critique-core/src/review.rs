//! Review runner - the sequential read, submit, report loop

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::feedback::FileReport;
use crate::provider::FeedbackProvider;
use crate::source::SourceFile;

/// Runs reviews over a list of input paths
///
/// Files are processed sequentially, in the order given, one provider call
/// per file. A failure on one file is recorded in that file's report and the
/// run continues; the output always has one report per input, same order.
#[derive(Debug, Clone, Default)]
pub struct ReviewRunner;

impl ReviewRunner {
    /// Create a new runner
    pub fn new() -> Self {
        Self
    }

    /// Review every path and collect one report per path
    pub async fn run(
        &self,
        provider: &dyn FeedbackProvider,
        paths: &[PathBuf],
    ) -> Vec<FileReport> {
        let mut reports = Vec::with_capacity(paths.len());

        for path in paths {
            reports.push(self.run_one(provider, path).await);
        }

        reports
    }

    /// Review a single path
    async fn run_one(&self, provider: &dyn FeedbackProvider, path: &Path) -> FileReport {
        let source = match SourceFile::read(path) {
            Ok(source) => source,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read source file");
                return FileReport::failed(path, e);
            }
        };

        if !source.is_python() {
            warn!(path = %path.display(), "File does not have a .py extension, submitting anyway");
        }

        debug!(
            path = %path.display(),
            bytes = source.contents().len(),
            provider = provider.name(),
            "Submitting file for review"
        );

        match provider.review(&source).await {
            Ok(feedback) => {
                debug!(
                    path = %path.display(),
                    issues = feedback.issues.len(),
                    "Received feedback"
                );
                FileReport::reviewed(path, feedback)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Provider call failed");
                FileReport::failed(path, e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{Feedback, Issue, Outcome, Severity};
    use crate::{Error, Result};
    use async_trait::async_trait;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// In-memory provider that flags any file containing "bad"
    struct StubProvider;

    #[async_trait]
    impl FeedbackProvider for StubProvider {
        fn name(&self) -> &'static str {
            "stub"
        }

        async fn review(&self, source: &SourceFile) -> Result<Feedback> {
            if source.contents().contains("explode") {
                return Err(Error::Provider("stub exploded".to_string()));
            }

            let issues = if source.contents().contains("bad") {
                vec![Issue {
                    kind: "stub_finding".to_string(),
                    severity: Severity::Low,
                    line: Some(1),
                    col: Some(0),
                    message: Some("found 'bad'".to_string()),
                    details: None,
                    suggested_fix: None,
                }]
            } else {
                vec![]
            };

            Ok(Feedback {
                success: true,
                message: "Analysis complete".to_string(),
                issues,
            })
        }
    }

    fn temp_py(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".py").unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[tokio::test]
    async fn test_one_report_per_path_in_order() {
        let clean = temp_py("x = 1\n");
        let flagged = temp_py("bad = True\n");

        let paths = vec![
            clean.path().to_path_buf(),
            flagged.path().to_path_buf(),
        ];

        let reports = ReviewRunner::new().run(&StubProvider, &paths).await;

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].path, paths[0]);
        assert_eq!(reports[1].path, paths[1]);
        assert!(reports[0].is_clean());
        assert!(!reports[1].is_clean());
    }

    #[tokio::test]
    async fn test_missing_file_does_not_abort_run() {
        let clean = temp_py("x = 1\n");

        let paths = vec![
            PathBuf::from("/nonexistent/path/12345.py"),
            clean.path().to_path_buf(),
        ];

        let reports = ReviewRunner::new().run(&StubProvider, &paths).await;

        assert_eq!(reports.len(), 2);
        assert!(matches!(reports[0].outcome, Outcome::Failed { .. }));
        assert!(reports[1].is_clean());
    }

    #[tokio::test]
    async fn test_provider_failure_is_isolated() {
        let failing = temp_py("explode()\n");
        let clean = temp_py("x = 1\n");

        let paths = vec![failing.path().to_path_buf(), clean.path().to_path_buf()];

        let reports = ReviewRunner::new().run(&StubProvider, &paths).await;

        assert_eq!(reports.len(), 2);
        match &reports[0].outcome {
            Outcome::Failed { error } => assert!(error.contains("stub exploded")),
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(reports[1].is_clean());
    }

    #[tokio::test]
    async fn test_zero_paths_yields_empty_reports() {
        let reports = ReviewRunner::new().run(&StubProvider, &[]).await;
        assert!(reports.is_empty());
    }
}
