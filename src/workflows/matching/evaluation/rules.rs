use super::super::domain::{JobPosting, ResolutionMap, SubtypeDisclosure};
use super::SubtypeMatch;

/// Verdict for one disclosed subtype against one posting. `None` when the
/// posting does not accept the subtype: not applicable, contributing nothing
/// to this job, neither pass nor fail.
///
/// For an accepted subtype, every reported barrier lands in exactly one of
/// the matched/missing lists: matched when at least one accommodation the
/// posting offers is known to resolve it, missing otherwise. A barrier the
/// resolution map has no entry for resolves to nothing and is always missing.
pub(crate) fn subtype_verdict(
    disclosure: &SubtypeDisclosure,
    posting: &JobPosting,
    resolutions: &ResolutionMap,
) -> Option<SubtypeMatch> {
    if !posting.accepts(&disclosure.subtype_id) {
        return None;
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for barrier in &disclosure.barriers {
        let resolved = resolutions
            .resolvers(barrier)
            .map(|resolvers| !resolvers.is_disjoint(&posting.offered_accessibilities))
            .unwrap_or(false);

        if resolved {
            matched.push(barrier.clone());
        } else {
            missing.push(barrier.clone());
        }
    }

    Some(SubtypeMatch {
        subtype_id: disclosure.subtype_id.clone(),
        subtype_name: disclosure.subtype_name.clone(),
        matched_barriers: matched,
        missing_barriers: missing,
    })
}
