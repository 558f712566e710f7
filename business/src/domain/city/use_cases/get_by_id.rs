use async_trait::async_trait;

use crate::domain::city::errors::CityError;
use crate::domain::city::model::City;

pub struct GetCityByIdParams {
    pub city_id: i64,
}

#[async_trait]
pub trait GetCityByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetCityByIdParams) -> Result<City, CityError>;
}
