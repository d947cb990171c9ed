use super::accumulator::CandidateGroup;
use super::options::GroupOptions;
use crate::types::BoundingBox;
use log::debug;

/// Greedy single pass over candidates sorted left to right.
///
/// Each candidate joins the first group, in creation order, whose last member
/// admits it; otherwise it opens a new group. Ties in `x` keep input order.
pub fn build_groups(candidates: &[BoundingBox], options: &GroupOptions) -> Vec<CandidateGroup> {
    let mut sorted = candidates.to_vec();
    sorted.sort_by_key(|b| b.x);

    let mut groups: Vec<CandidateGroup> = Vec::new();
    for candidate in sorted {
        let admitted = groups
            .iter_mut()
            .any(|group| group.try_admit(candidate, options));
        if !admitted {
            groups.push(CandidateGroup::new(candidate));
        }
    }
    groups
}

/// Pick the most credible group among those with at least `min_members`.
///
/// Ranking is by member count, then by the area of the first member. Remaining
/// ties go to the earliest-created group.
pub fn select_group(groups: Vec<CandidateGroup>, options: &GroupOptions) -> Option<CandidateGroup> {
    let mut best: Option<CandidateGroup> = None;
    for group in groups.into_iter().filter(|g| g.len() >= options.min_members) {
        let ranks_higher = best.as_ref().map_or(true, |current| {
            (group.len(), group.first_area()) > (current.len(), current.first_area())
        });
        if ranks_higher {
            best = Some(group);
        }
    }
    best
}

/// Group candidates and return the selected group's members in admission
/// order, or an empty vector when no group is credible enough.
pub fn group_candidates(candidates: &[BoundingBox], options: &GroupOptions) -> Vec<BoundingBox> {
    let groups = build_groups(candidates, options);
    let total_groups = groups.len();
    match select_group(groups, options) {
        Some(group) => {
            debug!(
                "group_candidates selected {} of {} candidates ({} groups)",
                group.len(),
                candidates.len(),
                total_groups
            );
            group.into_members()
        }
        None => {
            debug!(
                "group_candidates found no group with >= {} members among {} groups",
                options.min_members, total_groups
            );
            Vec::new()
        }
    }
}
