use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::workflows::matching::domain::{
    Accessibility, AccessibilityId, Barrier, BarrierId, Candidate, CandidateId, CandidateProfile,
    DisabilitySubtype, DisabilityTypeId, Job, JobId, JobPosting, ResolutionMap, SubtypeDisclosure,
    SubtypeId,
};
use crate::workflows::matching::evaluation::CompatibilityEngine;
use crate::workflows::matching::memory::InMemoryMatchStore;
use crate::workflows::matching::service::JobMatchService;
use crate::workflows::matching::store::{MatchStore, StoreError};

pub(super) fn candidate(id: &str, full_name: &str) -> Candidate {
    Candidate {
        id: CandidateId(id.to_string()),
        full_name: full_name.to_string(),
    }
}

pub(super) fn subtype(id: &str, name: &str) -> DisabilitySubtype {
    DisabilitySubtype {
        id: SubtypeId(id.to_string()),
        name: name.to_string(),
        disability_type: DisabilityTypeId("T1".to_string()),
    }
}

pub(super) fn barrier(id: &str) -> Barrier {
    Barrier {
        id: BarrierId(id.to_string()),
        description: format!("barrier {id}"),
    }
}

pub(super) fn accessibility(id: &str) -> Accessibility {
    Accessibility {
        id: AccessibilityId(id.to_string()),
        description: format!("accommodation {id}"),
    }
}

pub(super) fn job(id: &str, title: &str) -> Job {
    Job {
        id: JobId(id.to_string()),
        title: title.to_string(),
        description: format!("{title} role"),
        posted_on: NaiveDate::from_ymd_opt(2026, 5, 4),
    }
}

pub(super) fn posting(id: &str, title: &str, accepted: &[&str], offered: &[&str]) -> JobPosting {
    JobPosting {
        job: job(id, title),
        accepted_subtypes: accepted
            .iter()
            .map(|subtype_id| SubtypeId(subtype_id.to_string()))
            .collect(),
        offered_accessibilities: offered
            .iter()
            .map(|accessibility_id| AccessibilityId(accessibility_id.to_string()))
            .collect(),
    }
}

pub(super) fn disclosure(subtype_id: &str, name: &str, barriers: &[&str]) -> SubtypeDisclosure {
    SubtypeDisclosure {
        subtype_id: SubtypeId(subtype_id.to_string()),
        subtype_name: name.to_string(),
        barriers: barriers
            .iter()
            .map(|barrier_id| BarrierId(barrier_id.to_string()))
            .collect(),
    }
}

pub(super) fn profile(candidate_id: &str, disclosures: Vec<SubtypeDisclosure>) -> CandidateProfile {
    CandidateProfile {
        candidate: candidate(candidate_id, "Ana Souza"),
        disclosures,
    }
}

pub(super) fn resolution_map(edges: &[(&str, &str)]) -> ResolutionMap {
    ResolutionMap::from_edges(edges.iter().map(|(barrier_id, accessibility_id)| {
        (
            BarrierId(barrier_id.to_string()),
            AccessibilityId(accessibility_id.to_string()),
        )
    }))
}

pub(super) fn engine(profile: CandidateProfile, edges: &[(&str, &str)]) -> CompatibilityEngine {
    CompatibilityEngine::new(profile, resolution_map(edges))
}

pub(super) fn barrier_ids(ids: &[&str]) -> Vec<BarrierId> {
    ids.iter().map(|id| BarrierId(id.to_string())).collect()
}

pub(super) fn build_service(store: InMemoryMatchStore) -> JobMatchService<InMemoryMatchStore> {
    JobMatchService::new(Arc::new(store))
}

/// Store seeded with the recurring cast: candidate C1 disclosing S1 with
/// barriers B1 and B2, resolved by A1 and A2 respectively. Tests add jobs.
pub(super) fn scenario_store() -> InMemoryMatchStore {
    let mut store = InMemoryMatchStore::default();
    store.insert_candidate(candidate("C1", "Ana Souza"));
    store.insert_subtype(subtype("S1", "Low vision"));
    store.insert_barrier(barrier("B1"));
    store.insert_barrier(barrier("B2"));
    store.insert_accessibility(accessibility("A1"));
    store.insert_accessibility(accessibility("A2"));
    store.declare_subtype(CandidateId("C1".to_string()), SubtypeId("S1".to_string()));
    store.report_barrier(
        CandidateId("C1".to_string()),
        SubtypeId("S1".to_string()),
        BarrierId("B1".to_string()),
    );
    store.report_barrier(
        CandidateId("C1".to_string()),
        SubtypeId("S1".to_string()),
        BarrierId("B2".to_string()),
    );
    store.map_resolution(BarrierId("B1".to_string()), AccessibilityId("A1".to_string()));
    store.map_resolution(BarrierId("B2".to_string()), AccessibilityId("A2".to_string()));
    store
}

pub(super) fn add_job(
    store: &mut InMemoryMatchStore,
    id: &str,
    title: &str,
    accepted: &[&str],
    offered: &[&str],
) {
    store.insert_job(job(id, title));
    for subtype_id in accepted {
        store.accept_subtype(JobId(id.to_string()), SubtypeId(subtype_id.to_string()));
    }
    for accessibility_id in offered {
        store.offer_accessibility(
            JobId(id.to_string()),
            AccessibilityId(accessibility_id.to_string()),
        );
    }
}

/// Store whose every read fails, for outage propagation tests.
pub(super) struct UnavailableStore;

impl MatchStore for UnavailableStore {
    fn candidate_profile(&self, _candidate: &CandidateId) -> Result<CandidateProfile, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn barrier_resolutions(
        &self,
        _barriers: &BTreeSet<BarrierId>,
    ) -> Result<ResolutionMap, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn job_postings(&self) -> Result<Vec<JobPosting>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

/// Delegates to an inner store but fails any resolution lookup, proving the
/// service never consults the mapping for barrier-free candidates.
pub(super) struct FailingResolverStore {
    pub(super) inner: InMemoryMatchStore,
}

impl MatchStore for FailingResolverStore {
    fn candidate_profile(&self, candidate: &CandidateId) -> Result<CandidateProfile, StoreError> {
        self.inner.candidate_profile(candidate)
    }

    fn barrier_resolutions(
        &self,
        _barriers: &BTreeSet<BarrierId>,
    ) -> Result<ResolutionMap, StoreError> {
        Err(StoreError::Unavailable(
            "resolution lookup should not happen".to_string(),
        ))
    }

    fn job_postings(&self) -> Result<Vec<JobPosting>, StoreError> {
        self.inner.job_postings()
    }
}
