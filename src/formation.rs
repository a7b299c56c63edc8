//! Formation aggregate.
//!
//! One value of [`Formation`] is one academic program instance: identity
//! (name, director), set-once configuration, the student directory, and
//! the TD/TP group sets. All mutation goes through its methods, which
//! keep membership maps and recorded student numbers in sync by routing
//! every move through the executor.
//!
//! A formation is a plain value: deep copy is `Clone`, and restoring a
//! snapshot produces a new value for the caller to swap in (see
//! [`snapshot`](crate::snapshot)).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::allocation::{allocate_all, transfer, MoveOutcome};
use crate::config::FormationConfig;
use crate::directory::{is_valid_email, StudentDirectory};
use crate::error::FormationError;
use crate::models::{CourseUnit, Dimension, GroupId, GroupSet, Student, StudentId};

/// One academic program instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    name: String,
    director_name: String,
    director_email: String,
    config: FormationConfig,
    directory: StudentDirectory,
    tds: GroupSet,
    tps: GroupSet,
}

impl Formation {
    /// Creates a formation with no students, no units, no groups, and a
    /// fully unset configuration.
    ///
    /// Rejects empty names and an invalid director email.
    pub fn new(
        name: impl Into<String>,
        director_name: impl Into<String>,
        director_email: impl Into<String>,
    ) -> Result<Self, FormationError> {
        let name = name.into();
        let director_name = director_name.into();
        let director_email = director_email.into();
        if name.is_empty() {
            return Err(FormationError::EmptyField("formation name"));
        }
        if director_name.is_empty() {
            return Err(FormationError::EmptyField("director name"));
        }
        if !is_valid_email(&director_email) {
            return Err(FormationError::InvalidEmail(director_email));
        }
        Ok(Self {
            name,
            director_name,
            director_email,
            config: FormationConfig::new(),
            directory: StudentDirectory::new(),
            tds: GroupSet::new(),
            tps: GroupSet::new(),
        })
    }

    /// Formation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Director's full name.
    pub fn director_name(&self) -> &str {
        &self.director_name
    }

    /// Director's email address.
    pub fn director_email(&self) -> &str {
        &self.director_email
    }

    /// Set-once configuration values.
    pub fn config(&self) -> &FormationConfig {
        &self.config
    }

    /// Sets a group capacity (set-once, silently ignored afterwards).
    pub fn set_capacity(&mut self, dim: Dimension, capacity: u32) {
        self.config.set_capacity(dim, capacity);
    }

    /// Sets the per-student option count (set-once).
    pub fn set_option_count(&mut self, count: u32) {
        self.config.set_option_count(count);
    }

    /// The student roster and unit offering.
    pub fn directory(&self) -> &StudentDirectory {
        &self.directory
    }

    /// Registers a student.
    pub fn register_student(
        &mut self,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<StudentId, FormationError> {
        self.directory.register(last_name, first_name, email)
    }

    /// Looks up a student.
    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.directory.get(id)
    }

    /// Adds a mandatory course unit to the offering.
    pub fn add_mandatory_unit(&mut self, mut unit: CourseUnit) -> Result<(), FormationError> {
        unit.optional = false;
        unit.places = None;
        self.directory.offer_unit(unit)
    }

    /// Adds an optional course unit with a place cap (`None` = unlimited).
    pub fn add_optional_unit(
        &mut self,
        mut unit: CourseUnit,
        places: Option<u32>,
    ) -> Result<(), FormationError> {
        unit.optional = true;
        unit.places = places;
        self.directory.offer_unit(unit)
    }

    /// Selects an optional unit for a student.
    ///
    /// Requires the option count to be configured first.
    pub fn choose_option(&mut self, id: StudentId, code: &str) -> Result<(), FormationError> {
        let quota = self
            .config
            .option_count()
            .ok_or(FormationError::OptionCountNotSet)?;
        self.directory.choose_option(id, code, quota)
    }

    /// Ids of students enrolled in a given option, or `None` if the unit
    /// is not offered as an option.
    pub fn students_in_option(&self, code: &str) -> Option<BTreeSet<StudentId>> {
        let unit = self.directory.unit(code)?;
        if !unit.optional {
            return None;
        }
        Some(self.directory.enrolled_in(code))
    }

    /// Automatically assigns every unplaced student to TD and TP groups,
    /// creating groups as needed, then rebalances both dimensions.
    ///
    /// Every affected student receives one notification per move.
    pub fn auto_assign(&mut self) -> Result<(), FormationError> {
        allocate_all(&mut self.directory, &mut self.tds, &mut self.tps, &self.config)
    }

    /// Manually moves a student. `None` leaves a dimension unchanged.
    ///
    /// Capacity refusals are reported in the [`MoveOutcome`], not as an
    /// error; `Err` is reserved for an unknown student.
    pub fn move_student(
        &mut self,
        id: StudentId,
        new_td: Option<GroupId>,
        new_tp: Option<GroupId>,
    ) -> Result<MoveOutcome, FormationError> {
        let student = self
            .directory
            .get_mut(id)
            .ok_or(FormationError::UnknownStudent(id))?;
        Ok(transfer(
            student,
            &mut self.tds,
            &mut self.tps,
            &self.config,
            new_td,
            new_tp,
        ))
    }

    /// The groups of one dimension.
    pub fn groups(&self, dim: Dimension) -> &GroupSet {
        match dim {
            Dimension::Td => &self.tds,
            Dimension::Tp => &self.tps,
        }
    }

    /// Number of TD groups.
    pub fn td_group_count(&self) -> usize {
        self.tds.count()
    }

    /// Number of TP groups.
    pub fn tp_group_count(&self) -> usize {
        self.tps.count()
    }

    /// Members of a TD group, or `None` if the group does not exist.
    pub fn td_group(&self, id: GroupId) -> Option<&BTreeSet<StudentId>> {
        self.tds.members(id)
    }

    /// Members of a TP group, or `None` if the group does not exist.
    pub fn tp_group(&self, id: GroupId) -> Option<&BTreeSet<StudentId>> {
        self.tps.members(id)
    }
}
