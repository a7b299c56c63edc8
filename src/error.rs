//! Error types for formation operations.
//!
//! Capacity exhaustion on a group move is deliberately *not* here: the
//! move executor reports it through [`MoveOutcome`](crate::MoveOutcome)
//! so callers can retry against another group.

use thiserror::Error;

use crate::models::{Dimension, StudentId};

/// A recoverable failure of a formation operation.
///
/// Every variant leaves the formation unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormationError {
    /// A required identity field was empty.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// An email address did not match the accepted pattern.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// A course unit with this code is already offered.
    #[error("course unit {0} is already offered")]
    DuplicateUnit(String),

    /// No course unit with this code exists in the offering.
    #[error("unknown course unit {0}")]
    UnknownUnit(String),

    /// The course unit exists but is not offered as an option.
    #[error("course unit {0} is not offered as an option")]
    NotOptional(String),

    /// The option's place cap is reached.
    #[error("option {0} has no places left")]
    OptionFull(String),

    /// The student already selected this option.
    #[error("option {0} is already selected")]
    DuplicateOption(String),

    /// The student already selected the configured number of options.
    #[error("student {0} has already selected {1} options")]
    OptionQuotaReached(StudentId, u32),

    /// No student with this id is registered.
    #[error("unknown student {0}")]
    UnknownStudent(StudentId),

    /// A group capacity is still unconfigured.
    #[error("{0} group capacity has not been configured")]
    CapacityNotSet(Dimension),

    /// The option count is still unconfigured.
    #[error("option count has not been configured")]
    OptionCountNotSet,
}
