//! Group storage for one dimension (TD or TP).
//!
//! Groups are identified by 1-based contiguous integer ids and hold a set
//! of member student ids. Both maps and member sets are ordered so that
//! every scan (smallest group, extremal pair, first member of a group) is
//! deterministic.
//!
//! Membership lives here; each student's *recorded* group number lives on
//! the [`Student`](super::Student). The move executor keeps the two in sync.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::StudentId;

/// Group identifier, 1-based and contiguous within a dimension.
pub type GroupId = u32;

/// The two independent grouping dimensions of a formation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Discussion/tutorial groups (groupe dirigé).
    Td,
    /// Lab/practical groups (groupe pratique).
    Tp,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Td => write!(f, "TD"),
            Dimension::Tp => write!(f, "TP"),
        }
    }
}

/// All groups of one dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSet {
    groups: BTreeMap<GroupId, BTreeSet<StudentId>>,
}

impl GroupSet {
    /// Creates an empty group set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of groups.
    pub fn count(&self) -> usize {
        self.groups.len()
    }

    /// Whether no groups exist.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = GroupId> + '_ {
        self.groups.keys().copied()
    }

    /// Whether a group with the given id exists.
    pub fn contains(&self, id: GroupId) -> bool {
        self.groups.contains_key(&id)
    }

    /// Members of a group, or `None` if the group does not exist.
    pub fn members(&self, id: GroupId) -> Option<&BTreeSet<StudentId>> {
        self.groups.get(&id)
    }

    /// Member count of a group (0 if the group does not exist).
    pub fn size_of(&self, id: GroupId) -> usize {
        self.groups.get(&id).map_or(0, BTreeSet::len)
    }

    /// Total number of members across all groups.
    pub fn total_members(&self) -> usize {
        self.groups.values().map(BTreeSet::len).sum()
    }

    /// Creates the next group with id `count + 1` and returns its id.
    pub fn create_next(&mut self) -> GroupId {
        let id = self.groups.len() as GroupId + 1;
        self.groups.insert(id, BTreeSet::new());
        id
    }

    /// Grows the set one group at a time until `target` groups exist.
    ///
    /// Never shrinks: a `target` at or below the current count is a no-op.
    pub fn grow_to(&mut self, target: usize) {
        while self.groups.len() < target {
            self.create_next();
        }
    }

    /// Adds a student to a group. Returns `false` if the group is unknown.
    pub(crate) fn insert_member(&mut self, id: GroupId, student: StudentId) -> bool {
        match self.groups.get_mut(&id) {
            Some(members) => {
                members.insert(student);
                true
            }
            None => false,
        }
    }

    /// Removes a student from a group, if present.
    pub(crate) fn remove_member(&mut self, id: GroupId, student: StudentId) {
        if let Some(members) = self.groups.get_mut(&id) {
            members.remove(&student);
        }
    }

    /// First member of a group in id order.
    pub fn first_member(&self, id: GroupId) -> Option<StudentId> {
        self.groups.get(&id).and_then(|m| m.iter().next().copied())
    }

    /// Id of the group with the fewest members.
    ///
    /// Strict `<` over ascending ids, so the lowest tied id wins.
    pub fn smallest(&self) -> Option<GroupId> {
        let mut best: Option<(GroupId, usize)> = None;
        for (&id, members) in &self.groups {
            match best {
                Some((_, size)) if members.len() >= size => {}
                _ => best = Some((id, members.len())),
            }
        }
        best.map(|(id, _)| id)
    }

    /// Ids of the smallest and largest groups, found in a single pass.
    ///
    /// `<=`/`>=` over ascending ids, so the highest tied id wins on both
    /// sides — the same observable choice as a linear scan that replaces
    /// the current extreme on ties.
    pub fn extremes(&self) -> Option<(GroupId, GroupId)> {
        let mut min: Option<(GroupId, usize)> = None;
        let mut max: Option<(GroupId, usize)> = None;
        for (&id, members) in &self.groups {
            let size = members.len();
            if min.is_none_or(|(_, s)| size <= s) {
                min = Some((id, size));
            }
            if max.is_none_or(|(_, s)| size >= s) {
                max = Some((id, size));
            }
        }
        min.zip(max).map(|((lo, _), (hi, _))| (lo, hi))
    }

    /// Whether every group size lies in `[target - 1, target + 1]`.
    ///
    /// An empty set is balanced by definition.
    pub fn is_balanced(&self, target: f64) -> bool {
        self.groups.values().all(|members| {
            let size = members.len() as f64;
            size <= target + 1.0 && size >= target - 1.0
        })
    }
}
