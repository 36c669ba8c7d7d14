/*!
 * Quality report records consumed by the scoring engine.
 *
 * These structures mirror the review records stored upstream. The engine
 * reads them as-is and never mutates or persists them.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of review a report captures
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ReportType {
    /// Detailed error-log-based review on a 0-100 scale
    #[serde(rename = "LQA")]
    Lqa,
    /// Coarse 1-5 quality rating
    #[serde(rename = "QS")]
    Qs,
    /// Spot-check review sampled at random
    #[serde(rename = "Random_QA")]
    RandomQa,
}

/// Review workflow status of a report
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Being written by the reviewer
    Draft,
    /// Waiting for the translator to review the findings
    PendingTranslatorReview,
    /// Waiting for a final reviewer sign-off
    PendingFinalReview,
    /// Translator contested the findings
    TranslatorDisputed,
    /// Translator accepted the findings
    TranslatorAccepted,
    /// Review complete and locked
    Finalized,
}

impl ReportStatus {
    /// Whether a report in this status counts toward aggregate scoring
    pub fn counts_toward_scoring(&self) -> bool {
        matches!(self, Self::Finalized | Self::TranslatorAccepted)
    }
}

/// Severity of a logged translation error
///
/// `Unknown` absorbs malformed severity strings from upstream so
/// deserialization stays total; it carries a fixed penalty weight of 1.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Critical,
    Major,
    Minor,
    Preferential,
    #[serde(other)]
    Unknown,
}

impl Severity {
    /// All severities that carry configurable weights
    pub const KNOWN: [Severity; 4] = [Self::Critical, Self::Major, Self::Minor, Self::Preferential];

    /// Display name for detail text and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Major => "Major",
            Self::Minor => "Minor",
            Self::Preferential => "Preferential",
            Self::Unknown => "Unknown",
        }
    }
}

/// One line of a report's structured error log
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorEntry {
    /// Error taxonomy category (e.g. "Accuracy", "Terminology")
    pub error_type: String,
    /// Penalty severity
    pub severity: Severity,
    /// Number of occurrences
    pub count: u32,
    /// Free-text examples quoted from the reviewed content
    #[serde(default)]
    pub examples: String,
}

/// A quality review report for a single freelancer
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QualityReport {
    /// Report ID
    pub id: String,
    /// Freelancer the report reviews
    pub freelancer_id: String,
    /// Kind of review
    pub report_type: ReportType,
    /// Workflow status
    pub status: ReportStatus,
    /// LQA score on a 0-100 scale, manually entered or derived from errors
    #[serde(default)]
    pub lqa_score: Option<f64>,
    /// QS rating on a half-point 1-5 scale
    #[serde(default)]
    pub qs_score: Option<f64>,
    /// Volume of the reviewed sample, required to derive LQA from errors
    #[serde(default)]
    pub lqa_words_reviewed: Option<u32>,
    /// Structured error log backing the LQA score
    #[serde(default)]
    pub lqa_errors: Vec<ErrorEntry>,
    /// Creation time, used for monthly trend bucketing
    pub created_date: DateTime<Utc>,
}

impl QualityReport {
    /// Whether this report counts toward aggregate scoring
    pub fn counts_toward_scoring(&self) -> bool {
        self.status.counts_toward_scoring()
    }
}
