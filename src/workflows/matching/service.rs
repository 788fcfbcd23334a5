use std::sync::Arc;

use tracing::debug;

use super::domain::{CandidateId, ResolutionMap};
use super::evaluation::{CompatibilityEngine, JobCompatibility};
use super::store::{MatchStore, StoreError};

/// Facade composing the three collaborator reads with the decision core.
/// Stateless across calls: every invocation re-reads current data.
pub struct JobMatchService<S> {
    store: Arc<S>,
}

impl<S> JobMatchService<S>
where
    S: MatchStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Compute the postings compatible with one candidate.
    ///
    /// Fails only when the candidate does not exist or the store is
    /// unreachable; data-consistency gaps inside the loaded data degrade to
    /// non-matches instead of errors. Results are ordered by job id so
    /// repeated calls over unchanged data are byte-identical.
    pub fn find_compatible_jobs(
        &self,
        candidate: &CandidateId,
    ) -> Result<Vec<JobCompatibility>, MatchServiceError> {
        let profile = self.store.candidate_profile(candidate)?;

        // One bulk lookup for the union of all reported barriers; skipped
        // entirely when the candidate reported none.
        let barrier_union = profile.barrier_union();
        let resolutions = if barrier_union.is_empty() {
            ResolutionMap::default()
        } else {
            self.store.barrier_resolutions(&barrier_union)?
        };

        let postings = self.store.job_postings()?;
        let scanned = postings.len();

        let engine = CompatibilityEngine::new(profile, resolutions);
        let mut compatible: Vec<JobCompatibility> = postings
            .iter()
            .filter_map(|posting| engine.compatibility(posting))
            .collect();
        compatible.sort_by(|a, b| a.job_id.cmp(&b.job_id));

        debug!(
            candidate = %candidate.0,
            scanned,
            compatible = compatible.len(),
            "compatibility report computed"
        );

        Ok(compatible)
    }
}

/// Error raised by the match service.
#[derive(Debug, thiserror::Error)]
pub enum MatchServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
