/*!
 * Quality scoring settings.
 *
 * This module handles the tunable knobs of the quality score engine,
 * including partial overrides loaded from upstream and their resolution
 * into a validated effective configuration.
 */

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::SettingsError;
use crate::quality::report::Severity;

/// Default error taxonomy used when settings do not override it
pub static DEFAULT_ERROR_TYPES: Lazy<Vec<String>> = Lazy::new(|| {
    [
        "Accuracy",
        "Fluency",
        "Terminology",
        "Style",
        "Locale Convention",
        "Formatting",
        "Omission",
        "Addition",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
});

fn default_lqa_weight() -> f64 {
    4.0
}

fn default_qs_multiplier() -> f64 {
    20.0
}

fn default_probation_threshold() -> f64 {
    70.0
}

/// Default penalty weight for a severity
fn default_severity_weight(severity: Severity) -> f64 {
    match severity {
        Severity::Critical => 10.0,
        Severity::Major => 5.0,
        Severity::Minor => 2.0,
        Severity::Preferential => 0.5,
        Severity::Unknown => 1.0,
    }
}

/// Tunable quality scoring settings as stored upstream
///
/// Every field is optional in the stored record; unset fields fall back to
/// the engine defaults. Call [`QualitySettings::resolve`] to validate and
/// obtain an [`EffectiveQualitySettings`] for scoring.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QualitySettings {
    /// Relative weight of LQA vs QS in the combined score
    #[serde(default = "default_lqa_weight")]
    pub lqa_weight: f64,

    /// Scales the 1-5 QS scale onto the 0-100 range
    #[serde(default = "default_qs_multiplier")]
    pub qs_multiplier: f64,

    /// Combined score below this marks probation
    #[serde(default = "default_probation_threshold")]
    pub probation_threshold: f64,

    /// Error taxonomy override
    #[serde(default)]
    pub lqa_error_types: Option<Vec<String>>,

    /// Partial severity weight overrides, merged over the defaults
    #[serde(default)]
    pub lqa_error_weights: Option<HashMap<Severity, f64>>,
}

impl Default for QualitySettings {
    fn default() -> Self {
        Self {
            lqa_weight: default_lqa_weight(),
            qs_multiplier: default_qs_multiplier(),
            probation_threshold: default_probation_threshold(),
            lqa_error_types: None,
            lqa_error_weights: None,
        }
    }
}

impl QualitySettings {
    /// Parse settings from a JSON document, applying defaults for
    /// missing fields
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validate and resolve into an effective configuration
    ///
    /// Rejects settings that would produce undefined scores: an LQA weight
    /// at or below -1 zeroes or inverts the blend denominator, a
    /// non-positive QS multiplier collapses the QS scale, and negative
    /// severity weights would reward errors.
    pub fn resolve(&self) -> Result<EffectiveQualitySettings, SettingsError> {
        if self.lqa_weight <= -1.0 || !self.lqa_weight.is_finite() {
            return Err(SettingsError::InvalidLqaWeight(self.lqa_weight));
        }
        if self.qs_multiplier <= 0.0 || !self.qs_multiplier.is_finite() {
            return Err(SettingsError::InvalidQsMultiplier(self.qs_multiplier));
        }
        if !self.probation_threshold.is_finite() {
            return Err(SettingsError::InvalidProbationThreshold(self.probation_threshold));
        }

        let mut severity_weights: HashMap<Severity, f64> = Severity::KNOWN
            .iter()
            .map(|&severity| (severity, default_severity_weight(severity)))
            .collect();

        if let Some(overrides) = &self.lqa_error_weights {
            for (&severity, &weight) in overrides {
                // Typo'd severity keys deserialize to Unknown, whose weight
                // is fixed at 1 and cannot be overridden
                if severity == Severity::Unknown {
                    return Err(SettingsError::UnrecognizedSeverityOverride(weight));
                }
                if weight < 0.0 || !weight.is_finite() {
                    return Err(SettingsError::InvalidSeverityWeight {
                        severity: severity.name().to_string(),
                        weight,
                    });
                }
                severity_weights.insert(severity, weight);
            }
        }

        Ok(EffectiveQualitySettings {
            lqa_weight: self.lqa_weight,
            qs_multiplier: self.qs_multiplier,
            probation_threshold: self.probation_threshold,
            error_types: self
                .lqa_error_types
                .clone()
                .unwrap_or_else(|| DEFAULT_ERROR_TYPES.clone()),
            severity_weights,
        })
    }
}

/// Validated, fully-populated settings used by the scoring functions
///
/// Produced once per call chain by [`QualitySettings::resolve`]; the engine
/// never merges partial overrides on the fly.
#[derive(Debug, Clone)]
pub struct EffectiveQualitySettings {
    /// Relative weight of LQA vs QS in the combined score
    pub lqa_weight: f64,
    /// Scales the 1-5 QS scale onto the 0-100 range
    pub qs_multiplier: f64,
    /// Combined score below this marks probation
    pub probation_threshold: f64,
    /// Effective error taxonomy
    pub error_types: Vec<String>,
    /// Effective severity weights (defaults merged with overrides)
    severity_weights: HashMap<Severity, f64>,
}

impl EffectiveQualitySettings {
    /// Penalty weight for a severity
    ///
    /// Unknown severities always weigh 1, independent of overrides.
    pub fn severity_weight(&self, severity: Severity) -> f64 {
        self.severity_weights
            .get(&severity)
            .copied()
            .unwrap_or_else(|| default_severity_weight(Severity::Unknown))
    }

    /// Effective error taxonomy
    pub fn error_types(&self) -> &[String] {
        &self.error_types
    }
}

impl Default for EffectiveQualitySettings {
    fn default() -> Self {
        Self {
            lqa_weight: default_lqa_weight(),
            qs_multiplier: default_qs_multiplier(),
            probation_threshold: default_probation_threshold(),
            error_types: DEFAULT_ERROR_TYPES.clone(),
            severity_weights: Severity::KNOWN
                .iter()
                .map(|&severity| (severity, default_severity_weight(severity)))
                .collect(),
        }
    }
}
