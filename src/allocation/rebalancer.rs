//! Group rebalancing toward the ±1 band.
//!
//! # Algorithm
//!
//! Target = roster size / group count (real-valued). While any group's
//! size falls outside `[target - 1, target + 1]`: find the smallest and
//! largest groups in one pass and move the first member of the largest
//! into the smallest. Each move shrinks the gap between the chosen
//! extremal pair, so the loop converges to the band; it makes no claim
//! of optimality beyond that.
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies" — the same
//! greedy load-levelling family of heuristics.

use tracing::{debug, warn};

use crate::directory::StudentDirectory;
use crate::models::{Dimension, GroupSet};

use super::move_in_dimension;

/// Rebalances one dimension's groups until every size is within ±1 of
/// the per-group average.
///
/// Zero groups or an empty roster is already balanced. The loop also
/// carries a hard budget of one move per registered student; the
/// convergence argument makes the budget unreachable, so hitting it is
/// logged as a warning.
pub fn rebalance(
    directory: &mut StudentDirectory,
    groups: &mut GroupSet,
    dim: Dimension,
    capacity: u32,
) {
    if groups.is_empty() || directory.is_empty() {
        return;
    }

    let target = directory.len() as f64 / groups.count() as f64;
    let mut budget = directory.len();
    let mut moves = 0usize;

    while !groups.is_balanced(target) {
        if budget == 0 {
            warn!(%dim, moves, "rebalance move budget exhausted");
            break;
        }
        budget -= 1;

        let Some((min_id, max_id)) = groups.extremes() else {
            break;
        };
        let Some(student_id) = groups.first_member(max_id) else {
            break;
        };
        let Some(student) = directory.get_mut(student_id) else {
            break;
        };
        if !move_in_dimension(student, groups, capacity, dim, min_id) {
            break;
        }
        moves += 1;
    }

    debug!(%dim, moves, target, "rebalanced groups");
}
