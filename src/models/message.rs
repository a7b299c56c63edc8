//! Student notification model.
//!
//! Every successful group move appends one message to the moved student's
//! inbox. Messages are write-only from the allocation core's point of view:
//! nothing in the crate reads them back.

use serde::{Deserialize, Serialize};

/// Number of body characters kept in the preview title.
const TITLE_PREVIEW_CHARS: usize = 20;

/// A notification delivered to a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Preview: first 20 characters of the body plus an ellipsis marker.
    pub title: String,
    /// Full message body.
    pub body: String,
}

impl Message {
    /// Creates a message, deriving the title from the body.
    ///
    /// The preview is character-based, so multi-byte bodies never split
    /// a code point.
    pub fn new(body: impl Into<String>) -> Self {
        let body = body.into();
        let mut title: String = body.chars().take(TITLE_PREVIEW_CHARS).collect();
        title.push_str("...");
        Self { title, body }
    }
}
