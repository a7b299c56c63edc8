//! Student directory: roster and course unit offering.
//!
//! Holds every registered student keyed by id (ordered map, so roster
//! enumeration is stable and group seeding deterministic) plus the UE
//! offering of the formation. Registration validates identity fields;
//! option selection enforces place caps and the per-student quota.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use crate::error::FormationError;
use crate::models::{CourseUnit, Student, StudentId};

const EMAIL_PATTERN: &str =
    r"^[_A-Za-z0-9-]+(\.[_A-Za-z0-9-]+)*@[A-Za-z0-9]+(\.[A-Za-z0-9]+)*(\.[A-Za-z]{2,})$";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// Whether a string is an acceptable email address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
        .is_match(email)
}

/// The roster of a formation and its course unit offering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDirectory {
    students: BTreeMap<StudentId, Student>,
    units: Vec<CourseUnit>,
    next_id: StudentId,
}

impl StudentDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self {
            students: BTreeMap::new(),
            units: Vec::new(),
            next_id: 1,
        }
    }

    /// Registers a student and returns the assigned id.
    ///
    /// Rejects empty names and invalid emails without mutating the roster.
    pub fn register(
        &mut self,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<StudentId, FormationError> {
        let last_name = last_name.into();
        let first_name = first_name.into();
        let email = email.into();
        if last_name.is_empty() {
            return Err(FormationError::EmptyField("last name"));
        }
        if first_name.is_empty() {
            return Err(FormationError::EmptyField("first name"));
        }
        if !is_valid_email(&email) {
            return Err(FormationError::InvalidEmail(email));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.students
            .insert(id, Student::new(id, last_name, first_name, email));
        Ok(id)
    }

    /// Number of registered students.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Students in ascending id order.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    /// Student ids in ascending order.
    pub fn ids(&self) -> Vec<StudentId> {
        self.students.keys().copied().collect()
    }

    /// Looks up a student.
    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: StudentId) -> Option<&mut Student> {
        self.students.get_mut(&id)
    }

    /// The course unit offering.
    pub fn units(&self) -> &[CourseUnit] {
        &self.units
    }

    /// Looks up a course unit by code.
    pub fn unit(&self, code: &str) -> Option<&CourseUnit> {
        self.units.iter().find(|u| u.code == code)
    }

    /// Adds a unit to the offering, refusing duplicates by code.
    pub(crate) fn offer_unit(&mut self, unit: CourseUnit) -> Result<(), FormationError> {
        if unit.code.is_empty() {
            return Err(FormationError::EmptyField("course unit code"));
        }
        if self.unit(&unit.code).is_some() {
            return Err(FormationError::DuplicateUnit(unit.code));
        }
        self.units.push(unit);
        Ok(())
    }

    /// Ids of the students that selected a given option.
    pub fn enrolled_in(&self, code: &str) -> BTreeSet<StudentId> {
        self.students
            .values()
            .filter(|s| s.options.contains(code))
            .map(|s| s.id)
            .collect()
    }

    /// Selects an optional unit for a student.
    ///
    /// `quota` is the configured per-student option count. The selection
    /// is refused when the unit is unknown or mandatory, the place cap is
    /// reached, the student already selected it, or the quota is used up.
    pub(crate) fn choose_option(
        &mut self,
        id: StudentId,
        code: &str,
        quota: u32,
    ) -> Result<(), FormationError> {
        let unit = self
            .unit(code)
            .ok_or_else(|| FormationError::UnknownUnit(code.to_string()))?;
        if !unit.optional {
            return Err(FormationError::NotOptional(code.to_string()));
        }
        if !unit.has_place(self.enrolled_in(code).len()) {
            return Err(FormationError::OptionFull(code.to_string()));
        }

        let student = self
            .students
            .get_mut(&id)
            .ok_or(FormationError::UnknownStudent(id))?;
        if student.options.contains(code) {
            return Err(FormationError::DuplicateOption(code.to_string()));
        }
        if student.options.len() >= quota as usize {
            return Err(FormationError::OptionQuotaReached(id, quota));
        }
        student.options.insert(code.to_string());
        Ok(())
    }
}
