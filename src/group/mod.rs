//! Candidate grouping.
//!
//! Candidates are swept left to right and greedily attached to spatially
//! coherent groups. A candidate is compared only with the *last* member of a
//! group, which tolerates gradual drift of character height and baseline
//! along a line (mild perspective skew) and keeps the sweep at O(n·g).
//! Groups are tried in creation order and the first one that admits the
//! candidate wins; this order dependence is part of the contract.
//!
//! After the sweep, groups with fewer than three members are dropped and the
//! largest remaining group is selected, preferring larger leading characters
//! on ties.

mod accumulator;
mod admission;
mod grouper;
mod options;

pub use accumulator::CandidateGroup;
pub use admission::admits;
pub use grouper::{build_groups, group_candidates, select_group};
pub use options::GroupOptions;
