//! Move executor: single student-to-group transfers.
//!
//! A transfer touches one or both dimensions. Each requested dimension is
//! capacity-checked independently; a successful dimension removes the
//! student from their prior group, inserts them into the destination,
//! updates the recorded number, and appends exactly one notification. A
//! failed dimension mutates nothing and stays silent. Transfers never
//! create or delete groups.

use tracing::trace;

use crate::config::FormationConfig;
use crate::models::{Dimension, GroupId, GroupSet, Student};

/// Combined outcome of a (possibly two-dimension) transfer.
///
/// Four distinct states so callers can react per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Every requested dimension was moved.
    Moved,
    /// The TD move was refused; the TP move (if requested) succeeded.
    TdFull,
    /// The TP move was refused; the TD move (if requested) succeeded.
    TpFull,
    /// Both requested moves were refused.
    BothFull,
}

impl MoveOutcome {
    /// Whether every requested dimension was moved.
    pub fn is_success(self) -> bool {
        self == MoveOutcome::Moved
    }
}

/// Moves a student into new TD and/or TP groups.
///
/// `None` for a dimension means "leave it unchanged". A requested move is
/// refused when the destination is at capacity, does not exist, or the
/// dimension's capacity is still unconfigured; the refusal is reported in
/// the outcome, never as an error.
pub fn transfer(
    student: &mut Student,
    tds: &mut GroupSet,
    tps: &mut GroupSet,
    config: &FormationConfig,
    new_td: Option<GroupId>,
    new_tp: Option<GroupId>,
) -> MoveOutcome {
    let td_ok = match new_td {
        Some(dest) => dimension_move(student, tds, config, Dimension::Td, dest),
        None => true,
    };
    let tp_ok = match new_tp {
        Some(dest) => dimension_move(student, tps, config, Dimension::Tp, dest),
        None => true,
    };

    match (td_ok, tp_ok) {
        (true, true) => MoveOutcome::Moved,
        (false, true) => MoveOutcome::TdFull,
        (true, false) => MoveOutcome::TpFull,
        (false, false) => MoveOutcome::BothFull,
    }
}

fn dimension_move(
    student: &mut Student,
    groups: &mut GroupSet,
    config: &FormationConfig,
    dim: Dimension,
    dest: GroupId,
) -> bool {
    match config.capacity(dim) {
        Some(capacity) => move_in_dimension(student, groups, capacity, dim, dest),
        None => false,
    }
}

/// Capacity-checked transfer within one dimension.
///
/// Returns `false` without mutating anything when the destination is
/// unknown or full.
pub(crate) fn move_in_dimension(
    student: &mut Student,
    groups: &mut GroupSet,
    capacity: u32,
    dim: Dimension,
    dest: GroupId,
) -> bool {
    if !groups.contains(dest) || groups.size_of(dest) >= capacity as usize {
        return false;
    }

    let prior = student.group(dim);
    if let Some(old) = prior {
        groups.remove_member(old, student.id);
    }
    groups.insert_member(dest, student.id);
    student.set_group(dim, dest);

    let body = match prior {
        Some(old) => format!("changed group: {old} -> {dest}"),
        None => format!("new group: {dest}"),
    };
    trace!(%dim, student = student.id, from = ?prior, to = dest, "moved student");
    student.notify(body);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(td: u32, tp: u32) -> FormationConfig {
        let mut cfg = FormationConfig::new();
        cfg.set_capacity(Dimension::Td, td);
        cfg.set_capacity(Dimension::Tp, tp);
        cfg
    }

    fn groups(count: usize) -> GroupSet {
        let mut gs = GroupSet::new();
        gs.grow_to(count);
        gs
    }

    #[test]
    fn test_first_assignment_notifies_new_group() {
        let mut s = Student::new(1, "Curie", "Marie", "marie@univ.fr");
        let mut tds = groups(2);
        let mut tps = groups(1);
        let cfg = config(4, 4);

        let outcome = transfer(&mut s, &mut tds, &mut tps, &cfg, Some(2), None);
        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(s.td_group, Some(2));
        assert!(tds.members(2).unwrap().contains(&1));
        assert_eq!(s.messages.len(), 1);
        assert_eq!(s.messages[0].body, "new group: 2");
    }

    #[test]
    fn test_reassignment_notifies_change() {
        let mut s = Student::new(1, "Curie", "Marie", "marie@univ.fr");
        let mut tds = groups(2);
        let mut tps = groups(1);
        let cfg = config(4, 4);

        transfer(&mut s, &mut tds, &mut tps, &cfg, Some(1), None);
        let outcome = transfer(&mut s, &mut tds, &mut tps, &cfg, Some(2), None);
        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(s.td_group, Some(2));
        assert!(!tds.members(1).unwrap().contains(&1));
        assert!(tds.members(2).unwrap().contains(&1));
        assert_eq!(s.messages[1].body, "changed group: 1 -> 2");
    }

    #[test]
    fn test_full_destination_refused_without_mutation() {
        let mut resident = Student::new(1, "Pasteur", "Louis", "louis@univ.fr");
        let mut s = Student::new(2, "Curie", "Marie", "marie@univ.fr");
        let mut tds = groups(2);
        let mut tps = groups(1);
        let cfg = config(1, 1);

        transfer(&mut resident, &mut tds, &mut tps, &cfg, Some(1), None);
        transfer(&mut s, &mut tds, &mut tps, &cfg, Some(2), None);

        let outcome = transfer(&mut s, &mut tds, &mut tps, &cfg, Some(1), None);
        assert_eq!(outcome, MoveOutcome::TdFull);
        assert_eq!(s.td_group, Some(2));
        assert!(tds.members(2).unwrap().contains(&2));
        assert_eq!(tds.size_of(1), 1);
        assert_eq!(s.messages.len(), 1); // no notification on failure
    }

    #[test]
    fn test_both_dimensions_in_one_call() {
        let mut s = Student::new(1, "Curie", "Marie", "marie@univ.fr");
        let mut tds = groups(1);
        let mut tps = groups(1);
        let cfg = config(4, 4);

        let outcome = transfer(&mut s, &mut tds, &mut tps, &cfg, Some(1), Some(1));
        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(s.td_group, Some(1));
        assert_eq!(s.tp_group, Some(1));
        assert_eq!(s.messages.len(), 2); // one per successful dimension
    }

    #[test]
    fn test_combined_failure_states() {
        let mut resident = Student::new(1, "Pasteur", "Louis", "louis@univ.fr");
        let mut s = Student::new(2, "Curie", "Marie", "marie@univ.fr");
        let mut tds = groups(1);
        let mut tps = groups(1);
        let cfg = config(1, 1);

        transfer(&mut resident, &mut tds, &mut tps, &cfg, Some(1), Some(1));
        let outcome = transfer(&mut s, &mut tds, &mut tps, &cfg, Some(1), Some(1));
        assert_eq!(outcome, MoveOutcome::BothFull);
        assert_eq!(s.td_group, None);
        assert_eq!(s.tp_group, None);
        assert!(s.messages.is_empty());
    }

    #[test]
    fn test_unknown_destination_refused() {
        let mut s = Student::new(1, "Curie", "Marie", "marie@univ.fr");
        let mut tds = groups(1);
        let mut tps = groups(1);
        let cfg = config(4, 4);

        let outcome = transfer(&mut s, &mut tds, &mut tps, &cfg, Some(9), None);
        assert_eq!(outcome, MoveOutcome::TdFull);
        assert_eq!(s.td_group, None);
    }

    #[test]
    fn test_unset_capacity_refused() {
        let mut s = Student::new(1, "Curie", "Marie", "marie@univ.fr");
        let mut tds = groups(1);
        let mut tps = groups(1);
        let cfg = FormationConfig::new();

        let outcome = transfer(&mut s, &mut tds, &mut tps, &cfg, Some(1), None);
        assert_eq!(outcome, MoveOutcome::TdFull);
        assert_eq!(s.td_group, None);
    }
}
