use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for candidates.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

/// Identifier wrapper for disability subtypes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubtypeId(pub String);

/// Identifier wrapper for the broader disability types grouping subtypes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DisabilityTypeId(pub String);

/// Identifier wrapper for barriers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BarrierId(pub String);

/// Identifier wrapper for accessibility accommodations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccessibilityId(pub String);

/// Identifier wrapper for job postings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

/// A registered candidate. Subtype and barrier disclosures are association
/// rows, not fields here; see [`CandidateProfile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub full_name: String,
}

/// A specific disability category a candidate may disclose, grouped under a
/// broader disability type. The matcher reads only the id and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisabilitySubtype {
    pub id: SubtypeId,
    pub name: String,
    pub disability_type: DisabilityTypeId,
}

/// A concrete obstacle a candidate can associate with one of their subtypes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Barrier {
    pub id: BarrierId,
    pub description: String,
}

/// A facility or practice an employer can offer to resolve barriers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessibility {
    pub id: AccessibilityId,
    pub description: String,
}

/// A job posting as the CRUD layer records it. Only `id` and `title` feed the
/// compatibility report; the rest rides along so snapshots round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub posted_on: Option<NaiveDate>,
}

/// One disclosed subtype with the set of barriers reported under it. A
/// disclosure with an empty barrier set is valid: the candidate named the
/// subtype without reporting a concrete obstacle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtypeDisclosure {
    pub subtype_id: SubtypeId,
    pub subtype_name: String,
    pub barriers: BTreeSet<BarrierId>,
}

/// The canonical, normalized shape of a candidate's declarations. Built once
/// at the loader boundary so the evaluator never touches raw association rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub candidate: Candidate,
    /// Disclosures sorted by subtype id, one entry per declared subtype.
    pub disclosures: Vec<SubtypeDisclosure>,
}

impl CandidateProfile {
    /// Group raw association rows into disclosures. Duplicate declarations
    /// collapse; barrier rows under a subtype the candidate never declared
    /// are orphans and are dropped rather than trusted.
    pub fn assemble(
        candidate: Candidate,
        declared: Vec<DisabilitySubtype>,
        barrier_rows: Vec<(SubtypeId, BarrierId)>,
    ) -> Self {
        let mut disclosures: BTreeMap<SubtypeId, SubtypeDisclosure> = BTreeMap::new();
        for subtype in declared {
            disclosures
                .entry(subtype.id.clone())
                .or_insert(SubtypeDisclosure {
                    subtype_id: subtype.id,
                    subtype_name: subtype.name,
                    barriers: BTreeSet::new(),
                });
        }

        for (subtype_id, barrier_id) in barrier_rows {
            if let Some(disclosure) = disclosures.get_mut(&subtype_id) {
                disclosure.barriers.insert(barrier_id);
            }
        }

        Self {
            candidate,
            disclosures: disclosures.into_values().collect(),
        }
    }

    /// Union of every barrier reported across all disclosures, the input for
    /// a single bulk resolution lookup.
    pub fn barrier_union(&self) -> BTreeSet<BarrierId> {
        self.disclosures
            .iter()
            .flat_map(|disclosure| disclosure.barriers.iter().cloned())
            .collect()
    }
}

/// A job posting with its relations materialized as per-job sets so every
/// membership test during evaluation is a set lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub job: Job,
    pub accepted_subtypes: BTreeSet<SubtypeId>,
    pub offered_accessibilities: BTreeSet<AccessibilityId>,
}

impl JobPosting {
    /// Whether the posting declares it can accommodate this subtype. An empty
    /// accepted set accepts nothing.
    pub fn accepts(&self, subtype: &SubtypeId) -> bool {
        self.accepted_subtypes.contains(subtype)
    }
}

/// Adjacency view of the barrier-to-accommodation "resolves" relation,
/// restricted to the barriers one candidate reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionMap {
    by_barrier: BTreeMap<BarrierId, BTreeSet<AccessibilityId>>,
}

impl ResolutionMap {
    pub fn new(by_barrier: BTreeMap<BarrierId, BTreeSet<AccessibilityId>>) -> Self {
        Self { by_barrier }
    }

    pub fn from_edges(edges: impl IntoIterator<Item = (BarrierId, AccessibilityId)>) -> Self {
        let mut by_barrier: BTreeMap<BarrierId, BTreeSet<AccessibilityId>> = BTreeMap::new();
        for (barrier, accessibility) in edges {
            by_barrier.entry(barrier).or_default().insert(accessibility);
        }
        Self { by_barrier }
    }

    /// Accommodations known to resolve the barrier. `None` marks a barrier the
    /// mapping has no entry for (a data-consistency gap); callers treat it as
    /// an empty set, never as an error.
    pub fn resolvers(&self, barrier: &BarrierId) -> Option<&BTreeSet<AccessibilityId>> {
        self.by_barrier.get(barrier)
    }

    pub fn is_empty(&self) -> bool {
        self.by_barrier.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_barrier.len()
    }
}
