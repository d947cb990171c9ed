use super::admission::admits;
use super::options::GroupOptions;
use crate::types::BoundingBox;

/// Boxes believed to form one line of plate text, in admission order.
///
/// The group only grows through [`CandidateGroup::try_admit`], which tests the
/// incoming box against the most recently admitted member alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateGroup {
    members: Vec<BoundingBox>,
}

#[allow(clippy::len_without_is_empty)]
impl CandidateGroup {
    /// Open a group seeded with its first member.
    pub fn new(seed: BoundingBox) -> Self {
        Self {
            members: vec![seed],
        }
    }

    /// Build a group from members without checking admission between them.
    #[cfg(test)]
    pub(crate) fn from_members(members: Vec<BoundingBox>) -> Self {
        assert!(!members.is_empty(), "a group has at least one member");
        Self { members }
    }

    /// Append `candidate` if it passes the admission rule against the last
    /// member. Returns whether it was admitted.
    pub fn try_admit(&mut self, candidate: BoundingBox, options: &GroupOptions) -> bool {
        if admits(self.last(), &candidate, options) {
            self.members.push(candidate);
            true
        } else {
            false
        }
    }

    pub fn members(&self) -> &[BoundingBox] {
        &self.members
    }

    pub fn into_members(self) -> Vec<BoundingBox> {
        self.members
    }

    /// Most recently admitted member.
    pub fn last(&self) -> &BoundingBox {
        // Non-empty by construction.
        &self.members[self.members.len() - 1]
    }

    /// Member count; never zero, since a group always holds its seed.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Pixel area of the first (leftmost) member; the selection tie-break.
    pub fn first_area(&self) -> i64 {
        self.members.first().map_or(0, BoundingBox::area)
    }
}
