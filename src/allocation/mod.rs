//! Automatic group allocation.
//!
//! Three cooperating pieces, invoked in order by
//! [`allocate_all`](allocator::allocate_all):
//!
//! 1. **Allocator** — sizes each dimension (`ceil(roster / capacity)`
//!    groups), creates missing groups, and seeds every unassigned student
//!    into the currently smallest group.
//! 2. **Move executor** ([`transfer`]) — performs a single capacity-checked
//!    membership transfer and notifies the student.
//! 3. **Rebalancer** ([`rebalance`]) — moves one student at a time from the
//!    largest to the smallest group until all sizes sit within ±1 of the
//!    per-group average.
//!
//! The algorithm is greedy and heuristic: it reaches the ±1 band, not an
//! optimal partition.

mod allocator;
mod rebalancer;
mod transfer;

pub use allocator::allocate_all;
pub use rebalancer::rebalance;
pub use transfer::{transfer, MoveOutcome};

pub(crate) use transfer::move_in_dimension;
