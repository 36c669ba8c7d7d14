/*!
 * Quality score engine for freelancer review aggregation.
 *
 * This module turns per-report LQA and QS ratings into per-freelancer
 * quality summaries. It is split into several submodules:
 *
 * - `settings`: Tunable scoring settings, defaults, and validation
 * - `report`: Quality report records, statuses, and error logs
 * - `scoring`: Combined-score blending and LQA derivation from errors
 * - `aggregate`: Per-freelancer summaries and monthly trend bucketing
 */

// Re-export main types for easier usage
pub use self::aggregate::{FreelancerScoreSummary, MonthlyTrendPoint, aggregate_freelancer_scores, monthly_trend, monthly_trend_at};
pub use self::report::{ErrorEntry, QualityReport, ReportStatus, ReportType, Severity};
pub use self::scoring::{combined_score, lqa_from_errors};
pub use self::settings::{EffectiveQualitySettings, QualitySettings};

// Submodules
pub mod aggregate;
pub mod report;
pub mod scoring;
pub mod settings;
