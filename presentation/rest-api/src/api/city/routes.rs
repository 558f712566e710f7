use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::city::model::{CitiesPage, City, CityTags};
use business::domain::city::use_cases::get_all::GetCitiesUseCase;
use business::domain::city::use_cases::get_by_id::{GetCityByIdParams, GetCityByIdUseCase};
use business::domain::city::use_cases::get_tags::{GetCityTagsParams, GetCityTagsUseCase};

use crate::api::city::dto::{CitiesPageResponse, CityResponse, CityTagsResponse};
use crate::api::city::validation::{parse_cities_query, parse_city_id};
use crate::api::error::{ApiError, ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CityApi {
    get_cities_use_case: Arc<dyn GetCitiesUseCase>,
    get_city_use_case: Arc<dyn GetCityByIdUseCase>,
    get_tags_use_case: Arc<dyn GetCityTagsUseCase>,
}

impl CityApi {
    pub fn new(
        get_cities_use_case: Arc<dyn GetCitiesUseCase>,
        get_city_use_case: Arc<dyn GetCityByIdUseCase>,
        get_tags_use_case: Arc<dyn GetCityTagsUseCase>,
    ) -> Self {
        Self {
            get_cities_use_case,
            get_city_use_case,
            get_tags_use_case,
        }
    }

    async fn cities(
        &self,
        offset: Option<&str>,
        limit: Option<&str>,
    ) -> Result<CitiesPage, ApiError> {
        let page = parse_cities_query(offset, limit)?;
        Ok(self.get_cities_use_case.execute(page).await?)
    }

    async fn city(&self, raw_city_id: &str) -> Result<City, ApiError> {
        let city_id = parse_city_id(raw_city_id)?;
        Ok(self
            .get_city_use_case
            .execute(GetCityByIdParams { city_id })
            .await?)
    }

    async fn city_tags(&self, raw_city_id: &str) -> Result<CityTags, ApiError> {
        let city_id = parse_city_id(raw_city_id)?;
        Ok(self
            .get_tags_use_case
            .execute(GetCityTagsParams { city_id })
            .await?)
    }
}

/// City catalog API
///
/// Read-only endpoints over the city catalog and its descriptive tags.
#[OpenApi]
impl CityApi {
    /// List cities
    ///
    /// Returns a page of cities. `offset` (default 0) and `limit` (default 100)
    /// window the catalog; the `offset` in the response is the one to send
    /// for the next page.
    #[oai(path = "/cities", method = "get", tag = "ApiTags::Cities")]
    async fn get_cities(
        &self,
        offset: Query<Option<String>>,
        limit: Query<Option<String>>,
    ) -> GetCitiesResponse {
        match self.cities(offset.0.as_deref(), limit.0.as_deref()).await {
            Ok(page) => GetCitiesResponse::Ok(Json(page.into())),
            Err(err) => err.into(),
        }
    }

    /// Get a city by id
    #[oai(path = "/cities/:city_id", method = "get", tag = "ApiTags::Cities")]
    async fn get_city(&self, city_id: Path<String>) -> GetCityResponse {
        match self.city(&city_id.0).await {
            Ok(city) => GetCityResponse::Ok(Json(city.into())),
            Err(err) => err.into(),
        }
    }

    /// Get the tags of a city
    ///
    /// Climate, size and air quality descriptors of a single city.
    #[oai(path = "/cities/:city_id/tags", method = "get", tag = "ApiTags::Cities")]
    async fn get_city_tags(&self, city_id: Path<String>) -> GetCityTagsResponse {
        match self.city_tags(&city_id.0).await {
            Ok(tags) => GetCityTagsResponse::Ok(Json(tags.into())),
            Err(err) => err.into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCitiesResponse {
    #[oai(status = 200)]
    Ok(Json<CitiesPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<ApiError> for GetCitiesResponse {
    fn from(err: ApiError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => GetCitiesResponse::BadRequest(json),
            _ => GetCitiesResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCityResponse {
    #[oai(status = 200)]
    Ok(Json<CityResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<ApiError> for GetCityResponse {
    fn from(err: ApiError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => GetCityResponse::BadRequest(json),
            404 => GetCityResponse::NotFound(json),
            _ => GetCityResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCityTagsResponse {
    #[oai(status = 200)]
    Ok(Json<CityTagsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<ApiError> for GetCityTagsResponse {
    fn from(err: ApiError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => GetCityTagsResponse::BadRequest(json),
            404 => GetCityTagsResponse::NotFound(json),
            _ => GetCityTagsResponse::InternalError(json),
        }
    }
}
