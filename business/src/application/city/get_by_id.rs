use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::city::errors::CityError;
use crate::domain::city::model::City;
use crate::domain::city::repository::CityRepository;
use crate::domain::city::use_cases::get_by_id::{GetCityByIdParams, GetCityByIdUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetCityByIdUseCaseImpl {
    pub repository: Arc<dyn CityRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCityByIdUseCase for GetCityByIdUseCaseImpl {
    async fn execute(&self, params: GetCityByIdParams) -> Result<City, CityError> {
        self.logger
            .debug(&format!("Fetching city by id: {}", params.city_id));

        let city = self
            .repository
            .get_by_id(params.city_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CityError::NotFound,
                other => {
                    self.logger
                        .error(&format!("Failed to fetch city {}: {other}", params.city_id));
                    CityError::Repository(other)
                }
            })?;

        Ok(city)
    }
}
