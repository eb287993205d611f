#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.not_found")]
    NotFound,
    #[error("product.invalid_value")]
    InvalidValue(#[from] crate::domain::shared::value_objects::ValueObjectError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
