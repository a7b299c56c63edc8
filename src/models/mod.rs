//! Formation domain models.
//!
//! Core data types for one academic program instance: students, course
//! units, notifications, and per-dimension group storage.
//!
//! # Domain Mapping
//!
//! | formation | English |
//! |-----------|---------|
//! | TD (groupe dirigé) | discussion/tutorial group |
//! | TP (groupe pratique) | lab/practical group |
//! | UE (unité d'enseignement) | course unit |

mod course_unit;
mod group;
mod message;
mod student;

pub use course_unit::CourseUnit;
pub use group::{Dimension, GroupId, GroupSet};
pub use message::Message;
pub use student::{Student, StudentId};
