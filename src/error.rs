use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the client store.
///
/// Database failures are passed through untouched; the helpers below only
/// inspect them so callers can tell constraint violations apart.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),
}

impl Error {
    fn database_error(&self) -> Option<&(dyn sqlx::error::DatabaseError + 'static)> {
        match self {
            Error::Database(sqlx::Error::Database(db)) => Some(&**db),
            _ => None,
        }
    }

    /// True when a UNIQUE constraint (email or phone) rejected the statement.
    pub fn is_unique_violation(&self) -> bool {
        self.database_error()
            .is_some_and(|db| db.is_unique_violation())
    }

    /// True when a phone referenced a client that does not exist.
    pub fn is_foreign_key_violation(&self) -> bool {
        self.database_error()
            .is_some_and(|db| db.is_foreign_key_violation())
    }

    /// Name of the violated constraint, if the database reported one.
    pub fn constraint(&self) -> Option<&str> {
        self.database_error().and_then(|db| db.constraint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_not_violations() {
        let err = Error::Database(sqlx::Error::RowNotFound);
        assert!(!err.is_unique_violation());
        assert!(!err.is_foreign_key_violation());
        assert_eq!(err.constraint(), None);
    }
}
