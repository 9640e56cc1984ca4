use thiserror::Error;

pub mod command;
pub use command::{Command, FieldWidths, PrintMode};

/// Command store specific error types
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no search filters provided")]
    InvalidFilters,

    #[error("no command with id {0}")]
    NotFound(i64),

    #[error("storage operation failed: {0}")]
    Storage(#[from] rusqlite::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// True for caller mistakes that deserve a plain message instead of an abort.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            StoreError::InvalidArgument(_) | StoreError::InvalidFilters | StoreError::NotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(StoreError::InvalidFilters.is_user_error());
        assert!(StoreError::NotFound(3).is_user_error());
        assert!(!StoreError::Storage(rusqlite::Error::InvalidQuery).is_user_error());
    }

    #[test]
    fn test_not_found_message_names_the_id() {
        let err = StoreError::NotFound(42);
        assert_eq!(err.to_string(), "no command with id 42");
    }
}
