use async_trait::async_trait;

use crate::domain::city::errors::CityError;
use crate::domain::city::model::CitiesPage;
use crate::domain::city::pagination::PageRequest;

#[async_trait]
pub trait GetCitiesUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest) -> Result<CitiesPage, CityError>;
}
