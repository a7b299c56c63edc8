//! Set-once formation configuration.
//!
//! Group capacities and the per-student option count are defined exactly
//! once. A second set is silently ignored; callers check the getter to
//! know whether a write took effect. Unset values are `None` rather than
//! a sentinel, so nothing in the crate can divide by an unset capacity.

use serde::{Deserialize, Serialize};

use crate::models::Dimension;

/// Define-once configuration values of a formation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormationConfig {
    td_capacity: Option<u32>,
    tp_capacity: Option<u32>,
    option_count: Option<u32>,
}

impl FormationConfig {
    /// Creates a fully unset configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum students per group in a dimension, if configured.
    pub fn capacity(&self, dim: Dimension) -> Option<u32> {
        match dim {
            Dimension::Td => self.td_capacity,
            Dimension::Tp => self.tp_capacity,
        }
    }

    /// Sets a group capacity. Ignored if already set or if `capacity` is 0.
    pub fn set_capacity(&mut self, dim: Dimension, capacity: u32) {
        if capacity == 0 {
            return;
        }
        let slot = match dim {
            Dimension::Td => &mut self.td_capacity,
            Dimension::Tp => &mut self.tp_capacity,
        };
        if slot.is_none() {
            *slot = Some(capacity);
        }
    }

    /// Number of options each student must select, if configured.
    pub fn option_count(&self) -> Option<u32> {
        self.option_count
    }

    /// Sets the option count. Ignored if already set or if `count` is 0.
    pub fn set_option_count(&mut self, count: u32) {
        if count > 0 && self.option_count.is_none() {
            self.option_count = Some(count);
        }
    }
}
