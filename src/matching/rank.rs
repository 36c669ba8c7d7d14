/*!
 * Ranking a freelancer pool against a job.
 */

use log::debug;

use crate::matching::profile::{Freelancer, Job};
use crate::matching::score::{MatchResult, MatchScorer};

/// One entry of a ranked freelancer list
#[derive(Debug, Clone)]
pub struct RankedMatch<'a> {
    /// The scored freelancer
    pub freelancer: &'a Freelancer,
    /// Score and explanations for this freelancer
    pub result: MatchResult,
}

/// Score every freelancer against the job and sort best-first
///
/// Ordering is descending by score with ties broken by ascending
/// freelancer ID, so rankings are reproducible regardless of input order.
pub fn rank_freelancers<'a>(freelancers: &'a [Freelancer], job: &Job) -> Vec<RankedMatch<'a>> {
    let scorer = MatchScorer::new();

    let mut ranked: Vec<RankedMatch<'a>> = freelancers
        .iter()
        .map(|freelancer| RankedMatch {
            result: scorer.score_match(freelancer, job),
            freelancer,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.result
            .score
            .cmp(&a.result.score)
            .then_with(|| a.freelancer.id.cmp(&b.freelancer.id))
    });

    debug!("Ranked {} freelancers for job", ranked.len());

    ranked
}
