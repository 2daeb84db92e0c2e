//! Repository error classification.

use std::num::ParseIntError;
use thiserror::Error;

/// Failure of a repository operation.
///
/// Callers match on the variant to tell an absent customer apart from an
/// infrastructure failure. Underlying errors are carried as-is.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The connector could not produce a usable connection.
    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// A point lookup matched zero rows.
    #[error("customer not found")]
    NotFound,

    /// Preparing, executing or scanning a statement failed.
    #[error(transparent)]
    Statement(#[from] sqlx::Error),

    /// The supplied id is not a valid numeric id.
    #[error("invalid customer id {id:?}: {source}")]
    InvalidId {
        id: String,
        #[source]
        source: ParseIntError,
    },
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound)
    }
}

/// Parses an external id into the numeric form stored in the id column.
pub(crate) fn parse_id(id: &str) -> Result<i64, RepositoryError> {
    id.parse::<i64>().map_err(|source| RepositoryError::InvalidId {
        id: id.to_string(),
        source,
    })
}
