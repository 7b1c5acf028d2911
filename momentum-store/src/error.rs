//! Store error taxonomy. Intentionally minimal: callers only ever need to
//! distinguish a missing record from a broken snapshot file.

use thiserror::Error;

/// Errors surfaced by the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A lookup for an id that is not in the collection.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u32 },

    /// The snapshot file could not be read or written.
    #[error("transport: {0}")]
    Transport(#[from] std::io::Error),

    /// The snapshot file exists but does not decode.
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StoreError::NotFound {
            entity: "task",
            id: 42,
        };
        assert_eq!(err.to_string(), "task 42 not found");
    }

    #[test]
    fn test_transport_wraps_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StoreError::from(io);
        assert!(matches!(err, StoreError::Transport(_)));
        assert!(err.to_string().starts_with("transport:"));
    }
}
