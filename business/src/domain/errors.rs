/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.database_error: {0}")]
    DatabaseError(String),
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn database_error(cause: impl std::fmt::Display) -> Self {
        RepositoryError::DatabaseError(cause.to_string())
    }
}
