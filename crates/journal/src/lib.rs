//! # Maverick Journal
//!
//! Free-text journal notes for the current session.
//!
//! Notes are held in memory by whoever owns the `NoteBook` and vanish with it.
//! Nothing here touches the filesystem or any other durable store, and every
//! receipt says so.

pub mod error;
pub mod notes;

pub use error::JournalError;
pub use notes::{JournalNote, NOT_PERSISTENT_NOTICE, NoteBook, NoteReceipt};
