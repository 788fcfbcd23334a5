use super::super::domain::JobPosting;
use super::{JobCompatibility, SubtypeMatch};

/// Job-level verdict: a posting is compatible iff at least one applicable
/// subtype fully resolved. The returned entry keeps only the fully resolved
/// matches; verdicts with unresolved barriers are evidence against the job,
/// not part of the report.
pub(crate) fn job_compatibility(
    posting: &JobPosting,
    verdicts: Vec<SubtypeMatch>,
) -> Option<JobCompatibility> {
    let resolved: Vec<SubtypeMatch> = verdicts
        .into_iter()
        .filter(|verdict| verdict.all_resolved())
        .collect();

    if resolved.is_empty() {
        return None;
    }

    Some(JobCompatibility {
        job_id: posting.job.id.clone(),
        job_title: posting.job.title.clone(),
        matches: resolved,
    })
}
