/*!
 * # linguascore - Scoring and matching engine for a freelance-translator network
 *
 * A pure, stateless Rust library for quality scoring and job matching
 * in a translator network.
 *
 * ## Features
 *
 * - Derive LQA scores from structured error logs (penalty per 1000 words)
 * - Blend LQA and QS ratings into a combined 0-100 quality score
 * - Aggregate per-freelancer score summaries with probation detection
 * - Bucket reports into calendar-month trend series for dashboards
 * - Score freelancer-to-job compatibility across weighted criteria
 * - Rank a freelancer pool against a job with deterministic ordering
 * - Canonicalize ISO language codes and names at the ingestion boundary
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `quality`: Quality score engine:
 *   - `quality::settings`: Tunable scoring settings and defaults
 *   - `quality::report`: Quality report records and error logs
 *   - `quality::scoring`: Combined-score and LQA-from-errors math
 *   - `quality::aggregate`: Per-freelancer aggregation and monthly trends
 * - `matching`: Match score engine:
 *   - `matching::profile`: Freelancer and job records
 *   - `matching::score`: Weighted multi-criterion match scoring
 *   - `matching::rank`: Ranking a freelancer pool for a job
 * - `language_utils`: ISO language code and name canonicalization
 * - `errors`: Custom error types for the library
 *
 * Both engines are pure and synchronous: they read their inputs, allocate
 * fresh outputs, and hold no state between calls.
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod errors;
pub mod language_utils;
pub mod matching;
pub mod quality;

// Re-export main types for easier usage
pub use errors::{AppError, SettingsError};
pub use language_utils::{canonical_language_name, language_names_match};
pub use matching::{Freelancer, Job, MatchConfig, MatchDetail, MatchOutcome, MatchResult, MatchScorer, Proficiency};
pub use quality::{
    EffectiveQualitySettings, FreelancerScoreSummary, MonthlyTrendPoint, QualityReport, QualitySettings, ReportStatus,
    Severity,
};
