/*!
 * Unit tests for the quality score engine.
 *
 * Covers the scoring primitives and aggregation:
 * - Combined LQA/QS blending
 * - LQA derivation from error logs
 * - Per-freelancer summaries and probation
 * - Monthly trend bucketing
 */

use chrono::{DateTime, Utc};

use linguascore::quality::{
    EffectiveQualitySettings, QualitySettings, ReportStatus, Severity, aggregate_freelancer_scores, combined_score,
    lqa_from_errors, monthly_trend_at,
};

use crate::common::{error_entry, finalized_report, report_with_status};

// ============================================================================
// Combined Score Tests
// ============================================================================

#[test]
fn test_combinedScore_defaultWeights_shouldMatchWorkedExample() {
    let settings = EffectiveQualitySettings::default();

    // (90*4 + 4*20) / 5 = 88.0
    let combined = combined_score(Some(90.0), Some(4.0), &settings).unwrap();
    assert!((combined - 88.0).abs() < 1e-9);
}

#[test]
fn test_combinedScore_shouldStayBetweenItsExtremes() {
    let settings = EffectiveQualitySettings::default();

    let cases = [
        (0.0, 5.0),
        (100.0, 1.0),
        (55.5, 3.5),
        (12.0, 4.0),
        (99.9, 2.5),
    ];

    for (lqa, qs) in cases {
        let combined = combined_score(Some(lqa), Some(qs), &settings).unwrap();
        let scaled = qs * settings.qs_multiplier;
        assert!(
            combined >= lqa.min(scaled) - 1e-9 && combined <= lqa.max(scaled) + 1e-9,
            "weighted average escaped its extremes for lqa={lqa} qs={qs}"
        );
    }
}

#[test]
fn test_combinedScore_customWeights_shouldShiftTheBlend() {
    let settings = QualitySettings {
        lqa_weight: 9.0,
        ..Default::default()
    }
    .resolve()
    .unwrap();

    // (90*9 + 4*20) / 10 = 89.0
    let combined = combined_score(Some(90.0), Some(4.0), &settings).unwrap();
    assert!((combined - 89.0).abs() < 1e-9);
}

// ============================================================================
// LQA From Errors Tests
// ============================================================================

#[test]
fn test_lqaFromErrors_defaultWeights_shouldMatchWorkedExample() {
    let settings = EffectiveQualitySettings::default();

    // 2 Critical errors: penalty 20 per 1000 words, score 80.0
    let errors = vec![error_entry("Accuracy", Severity::Critical, 2)];
    assert_eq!(lqa_from_errors(Some(1000), &errors, &settings), Some(80.0));
}

#[test]
fn test_lqaFromErrors_overwhelmingErrors_shouldFloorAtZero() {
    let settings = EffectiveQualitySettings::default();

    let errors = vec![error_entry("Accuracy", Severity::Critical, 1000)];
    assert_eq!(lqa_from_errors(Some(10), &errors, &settings), Some(0.0));
}

#[test]
fn test_lqaFromErrors_mixedSeverities_shouldSumWeightedPenalties() {
    let settings = EffectiveQualitySettings::default();

    // 1*10 + 2*5 + 4*2 + 2*0.5 = 29 per 1000 words
    let errors = vec![
        error_entry("Accuracy", Severity::Critical, 1),
        error_entry("Fluency", Severity::Major, 2),
        error_entry("Style", Severity::Minor, 4),
        error_entry("Terminology", Severity::Preferential, 2),
    ];
    assert_eq!(lqa_from_errors(Some(1000), &errors, &settings), Some(71.0));
}

#[test]
fn test_lqaFromErrors_noReviewedVolume_shouldReturnNone() {
    let settings = EffectiveQualitySettings::default();
    let errors = vec![error_entry("Accuracy", Severity::Minor, 3)];

    assert_eq!(lqa_from_errors(None, &errors, &settings), None);
    assert_eq!(lqa_from_errors(Some(0), &errors, &settings), None);
}

// ============================================================================
// Aggregation Tests
// ============================================================================

#[test]
fn test_aggregate_mixedStatuses_shouldOnlyCountQualifyingReports() {
    let settings = EffectiveQualitySettings::default();

    let reports = vec![
        finalized_report("r1", Some(90.0), Some(4.0), "2026-05-01T00:00:00Z"),
        report_with_status(
            "r2",
            ReportStatus::TranslatorAccepted,
            Some(80.0),
            None,
            "2026-05-10T00:00:00Z",
        ),
        report_with_status("r3", ReportStatus::Draft, Some(0.0), Some(1.0), "2026-05-11T00:00:00Z"),
        report_with_status(
            "r4",
            ReportStatus::TranslatorDisputed,
            Some(0.0),
            None,
            "2026-05-12T00:00:00Z",
        ),
    ];

    let summary = aggregate_freelancer_scores(&reports, &settings);
    assert_eq!(summary.total_reviews, 2);
    assert_eq!(summary.avg_lqa, Some(85.0));
    assert_eq!(summary.avg_qs, Some(4.0));

    // (85*4 + 4*20) / 5 = 84.0
    let combined = summary.combined_score.unwrap();
    assert!((combined - 84.0).abs() < 1e-9);
    assert!(!summary.is_probation);
}

#[test]
fn test_aggregate_zeroQualifyingReports_shouldPropagateNull() {
    let settings = EffectiveQualitySettings::default();
    let reports = vec![report_with_status(
        "r1",
        ReportStatus::PendingFinalReview,
        Some(95.0),
        None,
        "2026-05-01T00:00:00Z",
    )];

    let summary = aggregate_freelancer_scores(&reports, &settings);
    assert_eq!(summary.combined_score, None);
    assert_eq!(summary.avg_lqa, None);
    assert_eq!(summary.avg_qs, None);
    assert!(!summary.is_probation, "no score must never mean probation");
}

#[test]
fn test_aggregate_probationThreshold_shouldBeStrictlyLess() {
    let settings = EffectiveQualitySettings::default();

    let just_below = vec![finalized_report("r1", Some(69.9), None, "2026-05-01T00:00:00Z")];
    assert!(aggregate_freelancer_scores(&just_below, &settings).is_probation);

    let exactly_at = vec![finalized_report("r1", Some(70.0), None, "2026-05-01T00:00:00Z")];
    assert!(!aggregate_freelancer_scores(&exactly_at, &settings).is_probation);
}

#[test]
fn test_aggregate_lqaOnlyReports_shouldPassLqaThrough() {
    let settings = EffectiveQualitySettings::default();
    let reports = vec![
        finalized_report("r1", Some(88.0), None, "2026-05-01T00:00:00Z"),
        finalized_report("r2", Some(92.0), None, "2026-05-02T00:00:00Z"),
    ];

    let summary = aggregate_freelancer_scores(&reports, &settings);
    assert_eq!(summary.combined_score, Some(90.0));
}

// ============================================================================
// Monthly Trend Tests
// ============================================================================

#[test]
fn test_monthlyTrend_sixMonthWindow_shouldRunOldestToNewest() {
    let settings = EffectiveQualitySettings::default();
    let reference: DateTime<Utc> = "2026-08-15T00:00:00Z".parse().unwrap();

    let points = monthly_trend_at(&[], &settings, 6, reference);
    assert_eq!(points.len(), 6);
    assert_eq!(points[0].month, "Mar 2026");
    assert_eq!(points[5].month, "Aug 2026");
}

#[test]
fn test_monthlyTrend_reportsOutsideWindow_shouldBeIgnored() {
    let settings = EffectiveQualitySettings::default();
    let reference: DateTime<Utc> = "2026-08-15T00:00:00Z".parse().unwrap();

    let reports = vec![
        finalized_report("old", Some(50.0), None, "2025-12-31T23:59:59Z"),
        finalized_report("in", Some(90.0), None, "2026-08-01T00:00:00Z"),
    ];

    let points = monthly_trend_at(&reports, &settings, 6, reference);
    let total: usize = points.iter().map(|p| p.count).sum();
    assert_eq!(total, 1);
    assert_eq!(points[5].avg_lqa, Some(90.0));
}

#[test]
fn test_monthlyTrend_bucketAverages_shouldRoundToOneDecimal() {
    let settings = EffectiveQualitySettings::default();
    let reference: DateTime<Utc> = "2026-08-15T00:00:00Z".parse().unwrap();

    let reports = vec![
        finalized_report("r1", Some(90.0), None, "2026-08-01T00:00:00Z"),
        finalized_report("r2", Some(85.5), None, "2026-08-05T00:00:00Z"),
        finalized_report("r3", Some(91.0), None, "2026-08-09T00:00:00Z"),
    ];

    let points = monthly_trend_at(&reports, &settings, 1, reference);
    // Mean is 88.8333..., rounded half-up at one decimal
    assert_eq!(points[0].avg_lqa, Some(88.8));
    assert_eq!(points[0].count, 3);
}
