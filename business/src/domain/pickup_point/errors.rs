#[derive(Debug, thiserror::Error)]
pub enum PickupPointError {
    #[error("pickup_point.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
