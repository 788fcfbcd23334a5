mod policy;
mod rules;

use serde::{Deserialize, Serialize};

use super::domain::{BarrierId, CandidateProfile, JobId, JobPosting, ResolutionMap, SubtypeId};

/// The decision core, fixed to one candidate's normalized profile and the
/// resolution map fetched for that candidate's barrier union. Evaluating a
/// posting is pure set reasoning: no I/O, no mutation, cannot fail.
pub struct CompatibilityEngine {
    profile: CandidateProfile,
    resolutions: ResolutionMap,
}

impl CompatibilityEngine {
    pub fn new(profile: CandidateProfile, resolutions: ResolutionMap) -> Self {
        Self {
            profile,
            resolutions,
        }
    }

    pub fn profile(&self) -> &CandidateProfile {
        &self.profile
    }

    /// Per-subtype verdicts for one posting, applicable subtypes only. A
    /// candidate with zero disclosures yields no verdicts for any posting.
    pub fn subtype_verdicts(&self, posting: &JobPosting) -> Vec<SubtypeMatch> {
        self.profile
            .disclosures
            .iter()
            .filter_map(|disclosure| rules::subtype_verdict(disclosure, posting, &self.resolutions))
            .collect()
    }

    /// Compatibility entry for one posting, `None` when the posting is not
    /// compatible with the candidate.
    pub fn compatibility(&self, posting: &JobPosting) -> Option<JobCompatibility> {
        policy::job_compatibility(posting, self.subtype_verdicts(posting))
    }
}

/// One subtype-level match in the compatibility report. Field names follow
/// the platform's outward JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtypeMatch {
    pub subtype_id: SubtypeId,
    pub subtype_name: String,
    pub matched_barriers: Vec<BarrierId>,
    pub missing_barriers: Vec<BarrierId>,
}

impl SubtypeMatch {
    /// True when no reported barrier was left unresolved. A disclosure with
    /// zero reported barriers passes trivially and stays distinguishable from
    /// an earned pass by its empty matched list.
    pub fn all_resolved(&self) -> bool {
        self.missing_barriers.is_empty()
    }
}

/// One compatible job in the final report, annotated with the subtype matches
/// that fully resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCompatibility {
    pub job_id: JobId,
    pub job_title: String,
    pub matches: Vec<SubtypeMatch>,
}
