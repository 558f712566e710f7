use async_trait::async_trait;

use crate::domain::city::errors::CityError;
use crate::domain::city::model::CityTags;

pub struct GetCityTagsParams {
    pub city_id: i64,
}

#[async_trait]
pub trait GetCityTagsUseCase: Send + Sync {
    async fn execute(&self, params: GetCityTagsParams) -> Result<CityTags, CityError>;
}
