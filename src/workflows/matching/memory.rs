use std::collections::{BTreeMap, BTreeSet};

use super::domain::{
    Accessibility, AccessibilityId, Barrier, BarrierId, Candidate, CandidateId, CandidateProfile,
    DisabilitySubtype, Job, JobId, JobPosting, ResolutionMap, SubtypeId,
};
use super::store::{MatchStore, StoreError};

/// In-memory rendition of the platform's relational tables: entity maps plus
/// ordered association-edge sets, mirroring the schema the CRUD layer owns.
/// Backs the snapshot ingest and the test suites.
///
/// Insertions happen during setup through the helpers below; reads go through
/// [`MatchStore`]. Duplicate association rows collapse, matching the unique
/// pair constraint on the real tables.
#[derive(Debug, Default, Clone)]
pub struct InMemoryMatchStore {
    candidates: BTreeMap<CandidateId, Candidate>,
    subtypes: BTreeMap<SubtypeId, DisabilitySubtype>,
    barriers: BTreeMap<BarrierId, Barrier>,
    accessibilities: BTreeMap<AccessibilityId, Accessibility>,
    jobs: BTreeMap<JobId, Job>,
    candidate_subtypes: BTreeSet<(CandidateId, SubtypeId)>,
    candidate_barriers: BTreeSet<(CandidateId, SubtypeId, BarrierId)>,
    barrier_accessibilities: BTreeSet<(BarrierId, AccessibilityId)>,
    job_subtypes: BTreeSet<(JobId, SubtypeId)>,
    job_accessibilities: BTreeSet<(JobId, AccessibilityId)>,
}

impl InMemoryMatchStore {
    pub fn insert_candidate(&mut self, candidate: Candidate) {
        self.candidates.insert(candidate.id.clone(), candidate);
    }

    pub fn insert_subtype(&mut self, subtype: DisabilitySubtype) {
        self.subtypes.insert(subtype.id.clone(), subtype);
    }

    pub fn insert_barrier(&mut self, barrier: Barrier) {
        self.barriers.insert(barrier.id.clone(), barrier);
    }

    pub fn insert_accessibility(&mut self, accessibility: Accessibility) {
        self.accessibilities
            .insert(accessibility.id.clone(), accessibility);
    }

    pub fn insert_job(&mut self, job: Job) {
        self.jobs.insert(job.id.clone(), job);
    }

    /// Record that a candidate discloses a subtype.
    pub fn declare_subtype(&mut self, candidate: CandidateId, subtype: SubtypeId) {
        self.candidate_subtypes.insert((candidate, subtype));
    }

    /// Record that a candidate experiences a barrier under one of their
    /// subtypes.
    pub fn report_barrier(
        &mut self,
        candidate: CandidateId,
        subtype: SubtypeId,
        barrier: BarrierId,
    ) {
        self.candidate_barriers.insert((candidate, subtype, barrier));
    }

    /// Record that an accommodation resolves a barrier.
    pub fn map_resolution(&mut self, barrier: BarrierId, accessibility: AccessibilityId) {
        self.barrier_accessibilities.insert((barrier, accessibility));
    }

    /// Record that a job accepts a subtype.
    pub fn accept_subtype(&mut self, job: JobId, subtype: SubtypeId) {
        self.job_subtypes.insert((job, subtype));
    }

    /// Record that a job offers an accommodation.
    pub fn offer_accessibility(&mut self, job: JobId, accessibility: AccessibilityId) {
        self.job_accessibilities.insert((job, accessibility));
    }

    pub fn contains_candidate(&self, id: &CandidateId) -> bool {
        self.candidates.contains_key(id)
    }

    pub fn contains_subtype(&self, id: &SubtypeId) -> bool {
        self.subtypes.contains_key(id)
    }

    pub fn contains_barrier(&self, id: &BarrierId) -> bool {
        self.barriers.contains_key(id)
    }

    pub fn contains_accessibility(&self, id: &AccessibilityId) -> bool {
        self.accessibilities.contains_key(id)
    }

    pub fn contains_job(&self, id: &JobId) -> bool {
        self.jobs.contains_key(id)
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }
}

impl MatchStore for InMemoryMatchStore {
    fn candidate_profile(&self, candidate: &CandidateId) -> Result<CandidateProfile, StoreError> {
        let record = self
            .candidates
            .get(candidate)
            .cloned()
            .ok_or(StoreError::NotFound)?;

        // Declarations pointing at subtype ids with no entity record are
        // dangling references; they are dropped here, and assemble() then
        // drops any barrier rows orphaned by that.
        let declared: Vec<DisabilitySubtype> = self
            .candidate_subtypes
            .iter()
            .filter(|(id, _)| id == candidate)
            .filter_map(|(_, subtype_id)| self.subtypes.get(subtype_id).cloned())
            .collect();

        let barrier_rows: Vec<(SubtypeId, BarrierId)> = self
            .candidate_barriers
            .iter()
            .filter(|(id, _, _)| id == candidate)
            .map(|(_, subtype_id, barrier_id)| (subtype_id.clone(), barrier_id.clone()))
            .collect();

        Ok(CandidateProfile::assemble(record, declared, barrier_rows))
    }

    fn barrier_resolutions(
        &self,
        barriers: &BTreeSet<BarrierId>,
    ) -> Result<ResolutionMap, StoreError> {
        let edges = self
            .barrier_accessibilities
            .iter()
            .filter(|(barrier_id, _)| barriers.contains(barrier_id))
            .cloned();
        Ok(ResolutionMap::from_edges(edges))
    }

    fn job_postings(&self) -> Result<Vec<JobPosting>, StoreError> {
        let postings = self
            .jobs
            .values()
            .map(|job| {
                let accepted_subtypes = self
                    .job_subtypes
                    .iter()
                    .filter(|(job_id, _)| *job_id == job.id)
                    .map(|(_, subtype_id)| subtype_id.clone())
                    .collect();
                let offered_accessibilities = self
                    .job_accessibilities
                    .iter()
                    .filter(|(job_id, _)| *job_id == job.id)
                    .map(|(_, accessibility_id)| accessibility_id.clone())
                    .collect();
                JobPosting {
                    job: job.clone(),
                    accepted_subtypes,
                    offered_accessibilities,
                }
            })
            .collect();
        Ok(postings)
    }
}
