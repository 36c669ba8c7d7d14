/*!
 * Match score engine for freelancer-to-job compatibility.
 *
 * Compares a job's requirement set against a freelancer's profile across
 * five weighted criteria. It is split into several submodules:
 *
 * - `profile`: Freelancer and job records, proficiency ordering
 * - `score`: Weighted multi-criterion scoring with explanations
 * - `rank`: Ranking a freelancer pool against a job
 */

// Re-export main types for easier usage
pub use self::profile::{Freelancer, Job, LanguageRequirement, LanguageSkill, Proficiency};
pub use self::rank::{RankedMatch, rank_freelancers};
pub use self::score::{MatchConfig, MatchDetail, MatchOutcome, MatchResult, MatchScorer};

// Submodules
pub mod profile;
pub mod rank;
pub mod score;
