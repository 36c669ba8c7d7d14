/*!
 * Per-freelancer aggregation of quality reports.
 *
 * Reduces a freelancer's report history into a score summary (averages,
 * combined score, probation flag) and into a calendar-month trend series
 * for dashboard charting.
 */

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::quality::report::QualityReport;
use crate::quality::scoring::{combined_score, round1};
use crate::quality::settings::EffectiveQualitySettings;

/// Default number of months covered by the trend series
pub const DEFAULT_TREND_MONTHS: usize = 6;

/// Fixed display scale for the supplementary QS chart series.
/// Deliberately decoupled from the configurable QS multiplier so a
/// multiplier override cannot double-scale the chart.
const QS_DISPLAY_SCALE: f64 = 20.0;

/// Aggregated score summary for one freelancer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FreelancerScoreSummary {
    /// Mean LQA score across qualifying reports
    pub avg_lqa: Option<f64>,
    /// Mean QS rating across qualifying reports
    pub avg_qs: Option<f64>,
    /// Weighted combined score, absent when no scored report qualifies
    pub combined_score: Option<f64>,
    /// Number of qualifying reports
    pub total_reviews: usize,
    /// Whether the combined score falls below the probation threshold
    pub is_probation: bool,
}

/// One calendar-month bucket of the trend series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyTrendPoint {
    /// Month label, e.g. "Mar 2026"
    pub month: String,
    /// Mean LQA score in the bucket, rounded to one decimal
    pub avg_lqa: Option<f64>,
    /// Mean QS rating in the bucket, rounded to one decimal
    pub avg_qs: Option<f64>,
    /// QS mean on the fixed 0-100 display scale, rounded to one decimal
    pub avg_qs_scaled: Option<f64>,
    /// Combined score in the bucket, rounded to one decimal
    pub combined_score: Option<f64>,
    /// Number of qualifying reports in the bucket
    pub count: usize,
}

/// Mean of the present values, or `None` when none are present
fn mean_of(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let present: Vec<f64> = values.flatten().collect();
    if present.is_empty() {
        None
    } else {
        Some(present.iter().sum::<f64>() / present.len() as f64)
    }
}

/// Aggregate a freelancer's reports into a score summary
///
/// Only finalized and translator-accepted reports qualify. Averages are
/// taken over the reports that actually carry the respective score, and the
/// combined score is absent when neither average exists. Probation is a
/// strict comparison against the threshold.
pub fn aggregate_freelancer_scores(
    reports: &[QualityReport],
    settings: &EffectiveQualitySettings,
) -> FreelancerScoreSummary {
    let qualifying: Vec<&QualityReport> = reports.iter().filter(|r| r.counts_toward_scoring()).collect();

    let avg_lqa = mean_of(qualifying.iter().map(|r| r.lqa_score));
    let avg_qs = mean_of(qualifying.iter().map(|r| r.qs_score));
    let combined = combined_score(avg_lqa, avg_qs, settings);

    let is_probation = combined.is_some_and(|score| score < settings.probation_threshold);

    debug!(
        "Aggregated {} of {} reports: combined={:?} probation={}",
        qualifying.len(),
        reports.len(),
        combined,
        is_probation
    );

    FreelancerScoreSummary {
        avg_lqa,
        avg_qs,
        combined_score: combined,
        total_reviews: qualifying.len(),
        is_probation,
    }
}

/// First instant of the month that lies `months_back` before `reference`
fn month_start_before(reference: DateTime<Utc>, months_back: usize) -> Option<DateTime<Utc>> {
    let total = reference.year() as i64 * 12 + reference.month0() as i64 - months_back as i64;
    let year = total.div_euclid(12) as i32;
    let month0 = total.rem_euclid(12) as u32;

    let date = NaiveDate::from_ymd_opt(year, month0 + 1, 1)?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

/// Bucket reports into the most recent calendar months, oldest first
///
/// Uses the current instant as the reference month; see
/// [`monthly_trend_at`] for the deterministic variant.
pub fn monthly_trend(
    reports: &[QualityReport],
    settings: &EffectiveQualitySettings,
    month_count: usize,
) -> Vec<MonthlyTrendPoint> {
    monthly_trend_at(reports, settings, month_count, Utc::now())
}

/// Bucket reports into the `month_count` calendar months ending at
/// `reference`, oldest first
///
/// Each bucket spans one calendar month inclusively and applies the same
/// status filter and averaging as [`aggregate_freelancer_scores`]. Numeric
/// outputs are rounded to one decimal; empty buckets carry no scores.
pub fn monthly_trend_at(
    reports: &[QualityReport],
    settings: &EffectiveQualitySettings,
    month_count: usize,
    reference: DateTime<Utc>,
) -> Vec<MonthlyTrendPoint> {
    let mut points = Vec::with_capacity(month_count);

    for months_back in (0..month_count).rev() {
        let Some(start) = month_start_before(reference, months_back) else {
            continue;
        };
        // First instant of the following month bounds the bucket
        let Some(next_start) = month_start_before(start + chrono::Duration::days(32), 0) else {
            continue;
        };

        let in_bucket: Vec<&QualityReport> = reports
            .iter()
            .filter(|r| r.counts_toward_scoring() && r.created_date >= start && r.created_date < next_start)
            .collect();

        let avg_lqa = mean_of(in_bucket.iter().map(|r| r.lqa_score));
        let avg_qs = mean_of(in_bucket.iter().map(|r| r.qs_score));
        let combined = combined_score(avg_lqa, avg_qs, settings);

        points.push(MonthlyTrendPoint {
            month: start.format("%b %Y").to_string(),
            avg_lqa: avg_lqa.map(round1),
            avg_qs: avg_qs.map(round1),
            avg_qs_scaled: avg_qs.map(|qs| round1(qs * QS_DISPLAY_SCALE)),
            combined_score: combined.map(round1),
            count: in_bucket.len(),
        });
    }

    points
}
