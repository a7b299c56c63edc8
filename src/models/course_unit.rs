//! Course unit (UE) model.
//!
//! A course unit is either mandatory for every student of the program or
//! optional with a configurable place cap. Whether a unit is mandatory or
//! optional is decided when it is added to a formation's offering, not at
//! construction time.

use serde::{Deserialize, Serialize};

/// A course unit offered by a formation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseUnit {
    /// Unique unit code within the offering (e.g., "INFO501").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Whether the unit is offered as an option.
    pub optional: bool,
    /// Place cap for optional units. `None` = unlimited.
    pub places: Option<u32>,
}

impl CourseUnit {
    /// Creates a course unit. It becomes mandatory or optional when added
    /// to a [`Formation`](crate::Formation) offering.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            optional: false,
            places: None,
        }
    }

    /// Whether the unit still has a free place given the current enrollment.
    pub fn has_place(&self, enrolled: usize) -> bool {
        match self.places {
            None => true,
            Some(cap) => enrolled < cap as usize,
        }
    }
}
