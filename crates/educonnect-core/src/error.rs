//! Error types for EduConnect

use thiserror::Error;

/// Main error type for EduConnect operations
#[derive(Error, Debug)]
pub enum EduError {
    /// User was not found in storage
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Post was not found in storage
    #[error("Post not found: {0}")]
    PostNotFound(String),

    /// Attached resource was not found in storage
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// An account with this email already exists
    #[error("An account with email {0} already exists")]
    EmailTaken(String),

    /// Sign-in failed. Deliberately the same message for unknown email and
    /// wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Operation requires a signed-in user
    #[error("Not signed in")]
    NotSignedIn,

    /// Operation requires ownership or another permission the user lacks
    #[error("Not allowed: {0}")]
    NotAllowed(String),

    /// A required field was left empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Attached file has an extension outside the allowlist
    #[error("File type not allowed: .{0}")]
    UnsupportedResourceType(String),

    /// Attached file exceeds the size limit
    #[error("File too large: {size} bytes (limit {limit})")]
    ResourceTooLarge { size: u64, limit: u64 },

    /// Password hashing or verification failed internally
    #[error("Password hash error: {0}")]
    PasswordHash(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid operation for current state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type alias using EduError
pub type EduResult<T> = Result<T, EduError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EduError::PostNotFound("post_123".to_string());
        assert_eq!(format!("{}", err), "Post not found: post_123");
    }

    #[test]
    fn test_missing_field_display() {
        let err = EduError::MissingField("title");
        assert_eq!(format!("{}", err), "title is required");
    }

    #[test]
    fn test_credentials_message_is_uniform() {
        assert_eq!(
            format!("{}", EduError::InvalidCredentials),
            "Invalid email or password"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let edu_err: EduError = io_err.into();
        assert!(matches!(edu_err, EduError::Io(_)));
    }
}
