use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::city::errors::CityError;
use crate::domain::city::model::CityTags;
use crate::domain::city::repository::CityRepository;
use crate::domain::city::use_cases::get_tags::{GetCityTagsParams, GetCityTagsUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetCityTagsUseCaseImpl {
    pub repository: Arc<dyn CityRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCityTagsUseCase for GetCityTagsUseCaseImpl {
    async fn execute(&self, params: GetCityTagsParams) -> Result<CityTags, CityError> {
        self.logger
            .debug(&format!("Fetching tags for city: {}", params.city_id));

        self.repository
            .get_tags(params.city_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CityError::NotFound,
                other => {
                    self.logger.error(&format!(
                        "Failed to fetch tags for city {}: {other}",
                        params.city_id
                    ));
                    CityError::Repository(other)
                }
            })
    }
}
