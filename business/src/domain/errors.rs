/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.corrupt_record")]
    CorruptRecord,
    #[error("repository.database_error")]
    DatabaseError,
}
