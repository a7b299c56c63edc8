//! Student model.
//!
//! A student carries identity fields, the recorded group number for each
//! dimension, an ordered inbox of notifications, and the set of optional
//! course units they selected. Group numbers are only written by the move
//! executor; the inbox is only appended to.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Dimension, GroupId, Message};

/// Student identifier, assigned sequentially at registration.
pub type StudentId = u32;

/// An enrolled student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: StudentId,
    /// Family name.
    pub last_name: String,
    /// Given name.
    pub first_name: String,
    /// Contact email address.
    pub email: String,
    /// Current TD group. `None` = unassigned.
    pub td_group: Option<GroupId>,
    /// Current TP group. `None` = unassigned.
    pub tp_group: Option<GroupId>,
    /// Received notifications, oldest first.
    pub messages: Vec<Message>,
    /// Codes of selected optional course units.
    pub options: BTreeSet<String>,
}

impl Student {
    /// Creates an unassigned student.
    pub fn new(
        id: StudentId,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            last_name: last_name.into(),
            first_name: first_name.into(),
            email: email.into(),
            td_group: None,
            tp_group: None,
            messages: Vec::new(),
            options: BTreeSet::new(),
        }
    }

    /// Recorded group number for a dimension.
    pub fn group(&self, dim: Dimension) -> Option<GroupId> {
        match dim {
            Dimension::Td => self.td_group,
            Dimension::Tp => self.tp_group,
        }
    }

    /// Records a group number for a dimension.
    pub(crate) fn set_group(&mut self, dim: Dimension, id: GroupId) {
        match dim {
            Dimension::Td => self.td_group = Some(id),
            Dimension::Tp => self.tp_group = Some(id),
        }
    }

    /// Appends a notification built from the given body.
    pub(crate) fn notify(&mut self, body: impl Into<String>) {
        self.messages.push(Message::new(body));
    }
}
