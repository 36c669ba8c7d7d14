/*!
 * Freelancer and job records consumed by the match engine.
 *
 * These structures mirror the profile and job postings stored upstream.
 * Optional requirement fields default to empty, making every comparison
 * total over missing data.
 */

use serde::{Deserialize, Serialize};

use crate::language_utils::canonical_language_name;

/// Language proficiency on a strictly ordered scale
///
/// A freelancer satisfies a language requirement iff their proficiency
/// ranks at or above the required one.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Proficiency {
    Intermediate,
    Professional,
    Fluent,
    Native,
}

impl Proficiency {
    /// Display name for detail text
    pub fn name(&self) -> &'static str {
        match self {
            Self::Intermediate => "Intermediate",
            Self::Professional => "Professional",
            Self::Fluent => "Fluent",
            Self::Native => "Native",
        }
    }
}

/// A language a freelancer works in
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LanguageSkill {
    /// Language name, canonicalized at ingestion
    pub language: String,
    /// Proficiency the freelancer claims
    pub proficiency: Proficiency,
}

/// A language requirement on a job
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LanguageRequirement {
    /// Language name, canonicalized at ingestion
    pub language: String,
    /// Minimum acceptable proficiency
    pub min_proficiency: Proficiency,
}

/// A freelancer profile
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Freelancer {
    /// Freelancer ID, also the deterministic ranking tie-break key
    pub id: String,
    /// Display name
    pub full_name: String,
    /// Languages with claimed proficiency
    #[serde(default)]
    pub languages: Vec<LanguageSkill>,
    /// Offered service types (e.g. "Translation", "Proofreading")
    #[serde(default)]
    pub service_types: Vec<String>,
    /// Subject-matter specializations (e.g. "Legal", "Medical")
    #[serde(default)]
    pub specializations: Vec<String>,
    /// Free-text tool and domain skills
    #[serde(default)]
    pub skills: Vec<String>,
    /// Years of professional experience
    #[serde(default)]
    pub experience_years: f64,
}

impl Freelancer {
    /// Copy of this profile with recognized language names canonicalized
    ///
    /// Ingestion-boundary helper: the match engine compares language names
    /// exactly, so profiles carrying ISO codes or odd casing should be
    /// normalized before scoring. Unrecognized names pass through unchanged.
    pub fn with_canonical_languages(&self) -> Self {
        let mut normalized = self.clone();
        for skill in &mut normalized.languages {
            if let Ok(canonical) = canonical_language_name(&skill.language) {
                skill.language = canonical;
            }
        }
        normalized
    }
}

/// A job posting's requirement set
///
/// An empty list or `None` means the criterion is unspecified and is left
/// out of the match score entirely.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Job {
    /// Required languages with minimum proficiency
    #[serde(default)]
    pub required_languages: Vec<LanguageRequirement>,
    /// Required service types
    #[serde(default)]
    pub required_service_types: Vec<String>,
    /// Required specializations
    #[serde(default)]
    pub required_specializations: Vec<String>,
    /// Required skills, matched fuzzily against profile skills
    #[serde(default)]
    pub required_skills: Vec<String>,
    /// Minimum years of experience
    #[serde(default)]
    pub min_experience_years: Option<f64>,
}

impl Job {
    /// Copy of this job with recognized language names canonicalized
    pub fn with_canonical_languages(&self) -> Self {
        let mut normalized = self.clone();
        for requirement in &mut normalized.required_languages {
            if let Ok(canonical) = canonical_language_name(&requirement.language) {
                requirement.language = canonical;
            }
        }
        normalized
    }
}
