/*!
 * Weighted multi-criterion match scoring.
 *
 * Each criterion contributes a fixed weight to the score only when the job
 * actually specifies a requirement for it, so the final percentage is
 * always relative to the criteria the job cares about. Every evaluated
 * criterion emits an explanation detail.
 */

use log::trace;
use serde::{Deserialize, Serialize};

use crate::matching::profile::{Freelancer, Job};

/// Criterion weights on the 100-point scale
///
/// The five weights sum to 100 only when a job specifies all five
/// criteria; unspecified criteria drop out of the denominator.
#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    /// Weight of the language criterion
    pub language_weight: f64,
    /// Weight of the service-type criterion
    pub service_weight: f64,
    /// Weight of the specialization criterion
    pub specialization_weight: f64,
    /// Weight of the experience criterion
    pub experience_weight: f64,
    /// Weight of the skill criterion
    pub skill_weight: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            language_weight: 40.0,
            service_weight: 20.0,
            specialization_weight: 20.0,
            experience_weight: 10.0,
            skill_weight: 10.0,
        }
    }
}

/// Outcome class of one evaluated criterion
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    /// Requirement fully satisfied
    Match,
    /// Requirement partially satisfied
    Partial,
    /// Requirement not satisfied
    Miss,
}

/// Human-readable explanation for one evaluated criterion
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MatchDetail {
    /// Outcome class
    pub outcome: MatchOutcome,
    /// Explanation combining criterion and outcome
    pub text: String,
}

impl MatchDetail {
    fn new(outcome: MatchOutcome, text: String) -> Self {
        Self { outcome, text }
    }
}

/// Result of scoring one freelancer against one job
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    /// Compatibility score 0-100, relative to the specified criteria
    pub score: u32,
    /// Explanations in evaluation order: languages, services,
    /// specializations, experience, skills
    pub details: Vec<MatchDetail>,
}

/// Match score calculator
pub struct MatchScorer {
    config: MatchConfig,
}

impl MatchScorer {
    /// Create a scorer with the standard weights
    pub fn new() -> Self {
        Self {
            config: MatchConfig::default(),
        }
    }

    /// Create with custom weights
    pub fn with_config(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Score a freelancer against a job's requirement set
    ///
    /// A job with no specified requirements scores 0 for every freelancer:
    /// an empty requirement set must not imply a perfect match.
    pub fn score_match(&self, freelancer: &Freelancer, job: &Job) -> MatchResult {
        let mut total_score = 0.0;
        let mut max_score = 0.0;
        let mut details = Vec::new();

        self.score_languages(freelancer, job, &mut total_score, &mut max_score, &mut details);
        self.score_services(freelancer, job, &mut total_score, &mut max_score, &mut details);
        self.score_specializations(freelancer, job, &mut total_score, &mut max_score, &mut details);
        self.score_experience(freelancer, job, &mut total_score, &mut max_score, &mut details);
        self.score_skills(freelancer, job, &mut total_score, &mut max_score, &mut details);

        let score = if max_score > 0.0 {
            ((total_score / max_score) * 100.0).round() as u32
        } else {
            0
        };

        trace!(
            "Scored freelancer {} against job: {}/{} -> {}",
            freelancer.id, total_score, max_score, score
        );

        MatchResult { score, details }
    }

    /// Per-language proficiency check; each required language carries an
    /// equal share of the language weight
    fn score_languages(
        &self,
        freelancer: &Freelancer,
        job: &Job,
        total_score: &mut f64,
        max_score: &mut f64,
        details: &mut Vec<MatchDetail>,
    ) {
        if job.required_languages.is_empty() {
            return;
        }

        *max_score += self.config.language_weight;
        let per_language = self.config.language_weight / job.required_languages.len() as f64;

        for requirement in &job.required_languages {
            let offered = freelancer
                .languages
                .iter()
                .find(|skill| skill.language == requirement.language);

            match offered {
                Some(skill) if skill.proficiency >= requirement.min_proficiency => {
                    *total_score += per_language;
                    details.push(MatchDetail::new(
                        MatchOutcome::Match,
                        format!(
                            "{}: {} meets required {}",
                            requirement.language,
                            skill.proficiency.name(),
                            requirement.min_proficiency.name()
                        ),
                    ));
                }
                Some(skill) => {
                    details.push(MatchDetail::new(
                        MatchOutcome::Partial,
                        format!(
                            "{}: {} below required {}",
                            requirement.language,
                            skill.proficiency.name(),
                            requirement.min_proficiency.name()
                        ),
                    ));
                }
                None => {
                    details.push(MatchDetail::new(
                        MatchOutcome::Miss,
                        format!("{}: not offered", requirement.language),
                    ));
                }
            }
        }
    }

    fn score_services(
        &self,
        freelancer: &Freelancer,
        job: &Job,
        total_score: &mut f64,
        max_score: &mut f64,
        details: &mut Vec<MatchDetail>,
    ) {
        if job.required_service_types.is_empty() {
            return;
        }

        *max_score += self.config.service_weight;

        let matched: Vec<&String> = job
            .required_service_types
            .iter()
            .filter(|required| freelancer.service_types.contains(*required))
            .collect();

        *total_score += self.config.service_weight * matched.len() as f64 / job.required_service_types.len() as f64;

        details.push(coverage_detail(
            "service",
            "services",
            &matched,
            &job.required_service_types,
        ));
    }

    fn score_specializations(
        &self,
        freelancer: &Freelancer,
        job: &Job,
        total_score: &mut f64,
        max_score: &mut f64,
        details: &mut Vec<MatchDetail>,
    ) {
        if job.required_specializations.is_empty() {
            return;
        }

        *max_score += self.config.specialization_weight;

        let matched: Vec<&String> = job
            .required_specializations
            .iter()
            .filter(|required| freelancer.specializations.contains(*required))
            .collect();

        *total_score +=
            self.config.specialization_weight * matched.len() as f64 / job.required_specializations.len() as f64;

        details.push(coverage_detail(
            "specialization",
            "specializations",
            &matched,
            &job.required_specializations,
        ));
    }

    /// Binary experience check: the full weight or nothing
    fn score_experience(
        &self,
        freelancer: &Freelancer,
        job: &Job,
        total_score: &mut f64,
        max_score: &mut f64,
        details: &mut Vec<MatchDetail>,
    ) {
        let Some(required_years) = job.min_experience_years else {
            return;
        };

        *max_score += self.config.experience_weight;

        if freelancer.experience_years >= required_years {
            *total_score += self.config.experience_weight;
            details.push(MatchDetail::new(
                MatchOutcome::Match,
                format!(
                    "Experience: {} years meets required {}",
                    freelancer.experience_years, required_years
                ),
            ));
        } else {
            details.push(MatchDetail::new(
                MatchOutcome::Miss,
                format!(
                    "Experience: {} years below required {}",
                    freelancer.experience_years, required_years
                ),
            ));
        }
    }

    /// Fuzzy skill check: a required skill is satisfied when any profile
    /// skill contains it or vice versa, ignoring case. Tolerates free-text
    /// entry inconsistencies like "SDL Trados" vs "trados".
    fn score_skills(
        &self,
        freelancer: &Freelancer,
        job: &Job,
        total_score: &mut f64,
        max_score: &mut f64,
        details: &mut Vec<MatchDetail>,
    ) {
        if job.required_skills.is_empty() {
            return;
        }

        *max_score += self.config.skill_weight;

        let offered_lower: Vec<String> = freelancer.skills.iter().map(|s| s.to_lowercase()).collect();

        let matched: Vec<&String> = job
            .required_skills
            .iter()
            .filter(|required| {
                let required_lower = required.to_lowercase();
                offered_lower
                    .iter()
                    .any(|offered| offered.contains(&required_lower) || required_lower.contains(offered))
            })
            .collect();

        *total_score += self.config.skill_weight * matched.len() as f64 / job.required_skills.len() as f64;

        details.push(coverage_detail("skill", "skills", &matched, &job.required_skills));
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// One detail per ratio criterion: full coverage matches, nonzero partial
/// coverage is partial, zero overlap misses
fn coverage_detail(singular: &str, plural: &str, matched: &[&String], required: &[String]) -> MatchDetail {
    if matched.len() == required.len() {
        MatchDetail::new(
            MatchOutcome::Match,
            format!("Required {} covered: {}", plural, join(matched)),
        )
    } else if !matched.is_empty() {
        let missing: Vec<&String> = required.iter().filter(|r| !matched.contains(r)).collect();
        MatchDetail::new(
            MatchOutcome::Partial,
            format!(
                "{} of {} required {} covered (missing: {})",
                matched.len(),
                required.len(),
                plural,
                join(&missing)
            ),
        )
    } else {
        MatchDetail::new(
            MatchOutcome::Miss,
            format!("No required {} offered", singular),
        )
    }
}

fn join(items: &[&String]) -> String {
    items.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ")
}
