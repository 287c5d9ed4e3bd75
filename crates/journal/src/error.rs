use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JournalError {
    #[error("A journal note cannot be empty")]
    EmptyNote,
}
