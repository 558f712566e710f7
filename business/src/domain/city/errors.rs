#[derive(Debug, thiserror::Error)]
pub enum CityError {
    #[error("city.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
