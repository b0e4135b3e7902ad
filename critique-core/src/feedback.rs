//! Feedback data model matching the provider wire format
//!
//! The provider returns one verdict per submitted file:
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Analysis complete",
//!   "issues": [
//!     {
//!       "type": "mutable_default_argument",
//!       "severity": "high",
//!       "line": 3,
//!       "col": 0,
//!       "message": "Function 'f' has a mutable default argument (list/dict/set).",
//!       "suggested_fix": "Use None as the default ..."
//!     }
//!   ]
//! }
//! ```
//!
//! A file that fails to parse on the provider side comes back with
//! `success = false` and a single `syntax_error` issue carrying `details`
//! instead of `message`. That is still feedback, not a transport error.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Issue severity as reported by the provider
///
/// Unrecognized severities are carried through verbatim rather than rejected,
/// so a newer provider does not break older clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    High,
    Medium,
    Low,
    /// Severity string this client does not know about
    Other(String),
}

impl From<String> for Severity {
    fn from(s: String) -> Self {
        match s.as_str() {
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            _ => Severity::Other(s),
        }
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        severity.to_string()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
            Severity::Low => write!(f, "low"),
            Severity::Other(s) => write!(f, "{}", s),
        }
    }
}

/// A single finding for a source file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Issue {
    /// Issue kind, e.g. `mutable_default_argument` or `syntax_error`
    #[serde(rename = "type")]
    pub kind: String,

    /// Reported severity
    pub severity: Severity,

    /// 1-based line number, when the provider can locate the issue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,

    /// 0-based column offset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col: Option<u32>,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Extra detail; syntax errors use this for the parser message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Suggested remediation text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_fix: Option<String>,
}

impl Issue {
    /// Best available description text for display
    pub fn description(&self) -> &str {
        self.message
            .as_deref()
            .or(self.details.as_deref())
            .unwrap_or("(no description)")
    }
}

/// The provider's verdict for one submitted file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Feedback {
    /// False when the provider could not analyze the file (e.g. syntax error)
    pub success: bool,

    /// Free-text status message
    #[serde(default)]
    pub message: String,

    /// Findings, possibly empty
    #[serde(default)]
    pub issues: Vec<Issue>,
}

impl Feedback {
    /// True when analysis ran and found nothing to report
    pub fn is_clean(&self) -> bool {
        self.success && self.issues.is_empty()
    }
}

/// Outcome of processing one input path
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The provider returned feedback for the file
    Reviewed { feedback: Feedback },
    /// The file could not be read or the provider call failed
    Failed { error: String },
}

/// One entry of the run's output: the input path plus what happened to it
///
/// A run produces exactly one report per input path, in input order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileReport {
    /// The path as given on the command line
    pub path: PathBuf,

    /// What happened for this path
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl FileReport {
    /// Build a report for a successful provider round trip
    pub fn reviewed(path: impl Into<PathBuf>, feedback: Feedback) -> Self {
        Self {
            path: path.into(),
            outcome: Outcome::Reviewed { feedback },
        }
    }

    /// Build a report for a failed path
    pub fn failed(path: impl Into<PathBuf>, error: impl fmt::Display) -> Self {
        Self {
            path: path.into(),
            outcome: Outcome::Failed {
                error: error.to_string(),
            },
        }
    }

    /// True when the file was reviewed and came back clean
    pub fn is_clean(&self) -> bool {
        matches!(&self.outcome, Outcome::Reviewed { feedback } if feedback.is_clean())
    }
}
