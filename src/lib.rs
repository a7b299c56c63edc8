//! Academic program (formation) administration.
//!
//! Manages one program instance: its enrolled students, mandatory and
//! optional course units (UE), and the assignment of students into
//! fixed-capacity discussion (TD) and lab (TP) groups. The centerpiece
//! is the automatic allocation pipeline: size each dimension, seed
//! unassigned students into the smallest group, then greedily rebalance
//! until every group sits within ±1 of the per-group average — notifying
//! each moved student along the way.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Student`, `CourseUnit`, `Message`,
//!   `GroupSet`, `Dimension`
//! - **`config`**: Set-once capacities and option count
//! - **`directory`**: Roster and course unit offering
//! - **`allocation`**: Allocator, rebalancer, and move executor
//! - **`formation`**: The `Formation` aggregate tying it all together
//! - **`snapshot`**: Save/load of whole formations to named slots
//! - **`validation`**: Post-hoc invariant audit
//!
//! # Example
//!
//! ```
//! use formation::{Formation, Dimension};
//!
//! let mut f = Formation::new("M1 Informatique", "E. Le Bras", "e.lebras@univ.fr")?;
//! f.set_capacity(Dimension::Td, 4);
//! f.set_capacity(Dimension::Tp, 3);
//! for i in 0..10 {
//!     f.register_student("Student", "Test", format!("s{i}@univ.fr"))?;
//! }
//! f.auto_assign()?;
//! assert_eq!(f.td_group_count(), 3); // ceil(10 / 4)
//! # Ok::<(), formation::FormationError>(())
//! ```

pub mod allocation;
pub mod config;
pub mod directory;
pub mod error;
pub mod formation;
pub mod models;
pub mod snapshot;
pub mod validation;

pub use allocation::{allocate_all, rebalance, transfer, MoveOutcome};
pub use config::FormationConfig;
pub use directory::{is_valid_email, StudentDirectory};
pub use error::FormationError;
pub use formation::Formation;
pub use models::{CourseUnit, Dimension, GroupId, GroupSet, Message, Student, StudentId};
pub use snapshot::{JsonSnapshotStore, SnapshotError, SnapshotStore};
pub use validation::{audit, AuditError, AuditErrorKind};
