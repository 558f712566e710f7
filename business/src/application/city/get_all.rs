use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::city::errors::CityError;
use crate::domain::city::model::CitiesPage;
use crate::domain::city::pagination::PageRequest;
use crate::domain::city::repository::CityRepository;
use crate::domain::city::use_cases::get_all::GetCitiesUseCase;
use crate::domain::logger::Logger;

pub struct GetCitiesUseCaseImpl {
    pub repository: Arc<dyn CityRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCitiesUseCase for GetCitiesUseCaseImpl {
    async fn execute(&self, page: PageRequest) -> Result<CitiesPage, CityError> {
        self.logger.debug(&format!(
            "Fetching cities offset={} limit={}",
            page.offset(),
            page.limit()
        ));

        let cities = self.repository.get_page(page).await.map_err(|e| {
            self.logger.error(&format!("Failed to fetch cities: {e}"));
            CityError::Repository(e)
        })?;
        let next_offset = page.next_offset(cities.len());

        self.logger.debug(&format!(
            "Found {} cities, next offset {}",
            cities.len(),
            next_offset
        ));
        Ok(CitiesPage {
            cities,
            next_offset,
        })
    }
}
