use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{City, CityTags};
use super::pagination::PageRequest;

#[async_trait]
pub trait CityRepository: Send + Sync {
    /// Cities in table order, windowed by `page`.
    async fn get_page(&self, page: PageRequest) -> Result<Vec<City>, RepositoryError>;
    async fn get_by_id(&self, city_id: i64) -> Result<City, RepositoryError>;
    async fn get_tags(&self, city_id: i64) -> Result<CityTags, RepositoryError>;
}
