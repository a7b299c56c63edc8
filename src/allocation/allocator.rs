//! Group sizing and seeding.
//!
//! # Algorithm
//!
//! For TD and TP independently:
//! 1. `required = roster / capacity`, plus one when the division leaves a
//!    remainder.
//! 2. Create groups with id `current_count + 1` until `required` exist.
//!    Existing groups are never removed, even when `required` is lower.
//! 3. Every student still unassigned in the dimension is moved into the
//!    smallest group through the move executor.
//!
//! Both dimensions are then handed to the
//! [`rebalancer`](super::rebalance) to smooth already-placed students.

use tracing::{debug, warn};

use crate::config::FormationConfig;
use crate::directory::StudentDirectory;
use crate::error::FormationError;
use crate::models::{Dimension, GroupSet, Student};

use super::{move_in_dimension, rebalance};

/// Sizes both dimensions, seeds unassigned students, and rebalances.
///
/// Fails with [`FormationError::CapacityNotSet`] when either capacity is
/// unconfigured; nothing is mutated in that case. An empty roster leaves
/// both dimensions without groups.
pub fn allocate_all(
    directory: &mut StudentDirectory,
    tds: &mut GroupSet,
    tps: &mut GroupSet,
    config: &FormationConfig,
) -> Result<(), FormationError> {
    let td_capacity = config
        .capacity(Dimension::Td)
        .ok_or(FormationError::CapacityNotSet(Dimension::Td))?;
    let tp_capacity = config
        .capacity(Dimension::Tp)
        .ok_or(FormationError::CapacityNotSet(Dimension::Tp))?;

    let roster = directory.len();
    tds.grow_to(required_groups(roster, td_capacity));
    tps.grow_to(required_groups(roster, tp_capacity));
    debug!(
        roster,
        td_groups = tds.count(),
        tp_groups = tps.count(),
        "sized groups"
    );

    for id in directory.ids() {
        let Some(student) = directory.get_mut(id) else {
            continue;
        };
        if student.group(Dimension::Td).is_none() {
            seed(student, tds, td_capacity, Dimension::Td);
        }
        if student.group(Dimension::Tp).is_none() {
            seed(student, tps, tp_capacity, Dimension::Tp);
        }
    }

    rebalance(directory, tds, Dimension::Td, td_capacity);
    rebalance(directory, tps, Dimension::Tp, tp_capacity);
    Ok(())
}

fn seed(student: &mut Student, groups: &mut GroupSet, capacity: u32, dim: Dimension) {
    let Some(dest) = groups.smallest() else {
        return;
    };
    if !move_in_dimension(student, groups, capacity, dim, dest) {
        // Sizing keeps a group below capacity while anyone is unassigned.
        warn!(%dim, student = student.id, group = dest, "seed move refused");
    }
}

/// `ceil(roster / capacity)` via a remainder check.
fn required_groups(roster: usize, capacity: u32) -> usize {
    let capacity = capacity as usize;
    let whole = roster / capacity;
    if whole * capacity == roster {
        whole
    } else {
        whole + 1
    }
}
