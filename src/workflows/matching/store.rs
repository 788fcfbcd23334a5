use std::collections::BTreeSet;

use super::domain::{BarrierId, CandidateId, CandidateProfile, JobPosting, ResolutionMap};

/// Storage abstraction over the platform's persistence layer so the matching
/// engine can be exercised against any backend, including in-memory fixtures.
///
/// All three reads are snapshots of current data; the engine performs no
/// writes and holds no state between invocations.
pub trait MatchStore: Send + Sync {
    /// The candidate record with disclosures normalized per subtype.
    /// Fails with [`StoreError::NotFound`] when the candidate does not exist.
    fn candidate_profile(&self, candidate: &CandidateId) -> Result<CandidateProfile, StoreError>;

    /// For each requested barrier, the set of accommodations that resolve it.
    /// Barriers with no known resolver may be absent from the result. An empty
    /// request yields an empty map without error.
    fn barrier_resolutions(
        &self,
        barriers: &BTreeSet<BarrierId>,
    ) -> Result<ResolutionMap, StoreError>;

    /// Every job posting with its accepted-subtype and offered-accessibility
    /// sets materialized.
    fn job_postings(&self) -> Result<Vec<JobPosting>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("candidate profile not found")]
    NotFound,
    #[error("match data unavailable: {0}")]
    Unavailable(String),
}
