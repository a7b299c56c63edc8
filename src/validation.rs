//! Invariant audit for a live formation.
//!
//! Checks the structural invariants that every trace of moves must
//! preserve:
//! - No group holds more members than the dimension's capacity
//! - A student belongs to at most one group per dimension
//! - Each student's recorded group number matches the group containing
//!   them (or is unset when they appear in no group)
//! - Group ids are 1-based and contiguous
//! - Every group member is a registered student
//!
//! The allocation core keeps all of these true at all times; the audit
//! exists for tests and for checks around restored snapshots.

use std::collections::HashMap;

use crate::formation::Formation;
use crate::models::{Dimension, GroupId, StudentId};

/// Audit result.
pub type AuditResult = Result<(), Vec<AuditError>>;

/// A detected invariant violation.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditError {
    /// Violation category.
    pub kind: AuditErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditErrorKind {
    /// A group holds more members than the configured capacity.
    CapacityExceeded,
    /// A student appears in more than one group of the same dimension.
    DuplicateMembership,
    /// A recorded group number disagrees with actual membership.
    MembershipMismatch,
    /// Group ids are not 1-based contiguous.
    NonContiguousIds,
    /// A group contains an id with no registered student.
    UnknownMember,
}

impl AuditError {
    fn new(kind: AuditErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Audits both dimensions of a formation.
///
/// Returns `Ok(())` when every invariant holds, `Err(errors)` with all
/// detected violations otherwise.
pub fn audit(formation: &Formation) -> AuditResult {
    let mut errors = Vec::new();
    audit_dimension(formation, Dimension::Td, &mut errors);
    audit_dimension(formation, Dimension::Tp, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn audit_dimension(formation: &Formation, dim: Dimension, errors: &mut Vec<AuditError>) {
    let groups = formation.groups(dim);
    let capacity = formation.config().capacity(dim);

    for (expected, id) in (1..).zip(groups.ids()) {
        if id != expected {
            errors.push(AuditError::new(
                AuditErrorKind::NonContiguousIds,
                format!("{dim} group ids skip from {} to {id}", expected - 1),
            ));
            break;
        }
    }

    let mut seen: HashMap<StudentId, GroupId> = HashMap::new();
    for id in groups.ids() {
        if let Some(cap) = capacity {
            if groups.size_of(id) > cap as usize {
                errors.push(AuditError::new(
                    AuditErrorKind::CapacityExceeded,
                    format!(
                        "{dim} group {id} holds {} members for capacity {cap}",
                        groups.size_of(id)
                    ),
                ));
            }
        }
        for &member in groups.members(id).into_iter().flatten() {
            if formation.directory().get(member).is_none() {
                errors.push(AuditError::new(
                    AuditErrorKind::UnknownMember,
                    format!("{dim} group {id} contains unregistered student {member}"),
                ));
            }
            if let Some(first) = seen.insert(member, id) {
                errors.push(AuditError::new(
                    AuditErrorKind::DuplicateMembership,
                    format!("student {member} is in {dim} groups {first} and {id}"),
                ));
            }
        }
    }

    for student in formation.directory().students() {
        let recorded = student.group(dim);
        let actual = seen.get(&student.id).copied();
        if recorded != actual {
            errors.push(AuditError::new(
                AuditErrorKind::MembershipMismatch,
                format!(
                    "student {} records {dim} group {recorded:?} but belongs to {actual:?}",
                    student.id
                ),
            ));
        }
    }
}
