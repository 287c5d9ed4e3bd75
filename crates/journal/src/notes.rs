use crate::error::JournalError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NOT_PERSISTENT_NOTICE: &str = "Note saved (not persistent in this version).";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalNote {
    pub text: String,
    pub submitted_at: DateTime<Utc>,
}

/// What the user is told after submitting a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteReceipt {
    pub message: String,
    /// Always `false`: notes never outlive the session.
    pub persistent: bool,
    pub notes_in_session: usize,
}

/// The notes of one session, held in memory only.
#[derive(Debug, Clone, Default)]
pub struct NoteBook {
    notes: Vec<JournalNote>,
}

impl NoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a note for the rest of the session. Blank notes are rejected.
    pub fn submit(&mut self, text: &str) -> Result<NoteReceipt, JournalError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(JournalError::EmptyNote);
        }

        self.notes.push(JournalNote {
            text: text.to_string(),
            submitted_at: Utc::now(),
        });
        tracing::debug!(notes = self.notes.len(), "Journal note kept in session memory.");

        Ok(NoteReceipt {
            message: NOT_PERSISTENT_NOTICE.to_string(),
            persistent: false,
            notes_in_session: self.notes.len(),
        })
    }

    pub fn notes(&self) -> &[JournalNote] {
        &self.notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_note_is_kept_for_the_session_only() {
        let mut book = NoteBook::new();
        let receipt = book.submit("  Cut losers faster.  ").unwrap();

        assert_eq!(receipt.message, "Note saved (not persistent in this version).");
        assert!(!receipt.persistent);
        assert_eq!(receipt.notes_in_session, 1);
        assert_eq!(book.notes()[0].text, "Cut losers faster.");

        // A fresh session starts empty.
        assert!(NoteBook::new().notes().is_empty());
    }

    #[test]
    fn blank_note_is_rejected() {
        let mut book = NoteBook::new();
        assert_eq!(book.submit(" \n\t").unwrap_err(), JournalError::EmptyNote);
        assert!(book.notes().is_empty());
    }
}
