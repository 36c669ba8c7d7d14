/*!
 * Core quality score math.
 *
 * Provides the two pure scoring primitives:
 * - Combined score: weighted blend of LQA (0-100) and QS (1-5) onto a
 *   single 0-100 scale
 * - LQA from errors: penalty-per-1000-words deduction from a perfect 100
 *
 * Both functions are total over missing inputs and never fail.
 */

use crate::quality::report::ErrorEntry;
use crate::quality::settings::EffectiveQualitySettings;

/// Round to one decimal place, half away from zero
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Blend average LQA and QS into a combined 0-100 score
///
/// LQA is already on a 0-100 scale; QS (1-5) is rescaled by the QS
/// multiplier before blending. The LQA weight expresses how many LQA units
/// one QS-equivalent unit is worth, hence the division by `weight + 1`.
/// When only one side is present it is passed through (rescaled for QS);
/// when neither is present there is no score.
pub fn combined_score(
    avg_lqa: Option<f64>,
    avg_qs: Option<f64>,
    settings: &EffectiveQualitySettings,
) -> Option<f64> {
    match (avg_lqa, avg_qs) {
        (Some(lqa), Some(qs)) => {
            Some((lqa * settings.lqa_weight + qs * settings.qs_multiplier) / (settings.lqa_weight + 1.0))
        }
        (Some(lqa), None) => Some(lqa),
        (None, Some(qs)) => Some(qs * settings.qs_multiplier),
        (None, None) => None,
    }
}

/// Derive an LQA score from a structured error log
///
/// Normalizes the total penalty to a fixed review-volume basis (errors per
/// 1000 words) so scores stay comparable across reports of different
/// length, then deducts it linearly from a perfect 100, clamped at 0 and
/// rounded to one decimal. Returns `None` when the reviewed volume is
/// missing or zero.
pub fn lqa_from_errors(
    words_reviewed: Option<u32>,
    errors: &[ErrorEntry],
    settings: &EffectiveQualitySettings,
) -> Option<f64> {
    let words = match words_reviewed {
        Some(w) if w > 0 => w as f64,
        _ => return None,
    };

    let total_penalty: f64 = errors
        .iter()
        .map(|entry| entry.count as f64 * settings.severity_weight(entry.severity))
        .sum();

    let penalty_per_1000 = (total_penalty / words) * 1000.0;
    let score = (100.0 - penalty_per_1000).max(0.0);

    Some(round1(score))
}
