use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::city::model::{CitiesPage, City, CityTags};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Object)]
pub struct CityResponse {
    pub city_id: i64,
    pub city_name: String,
    pub continent: String,
    /// ISO 3166-1 alpha-3 country code
    pub country_3_code: String,
}

impl From<City> for CityResponse {
    fn from(city: City) -> Self {
        Self {
            city_id: city.city_id,
            city_name: city.city_name,
            continent: city.continent,
            country_3_code: city.country_3_code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Object)]
pub struct CitiesPageResponse {
    /// Cities in this page, possibly empty
    pub cities: Vec<CityResponse>,
    /// Offset to request the next page with
    pub offset: u64,
}

impl From<CitiesPage> for CitiesPageResponse {
    fn from(page: CitiesPage) -> Self {
        Self {
            cities: page.cities.into_iter().map(Into::into).collect(),
            offset: page.next_offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Object)]
pub struct CityTagsResponse {
    pub city_id: i64,
    pub cloud_coverage: String,
    pub humidity: String,
    pub temperature: String,
    pub precipitation: String,
    pub air_quality: String,
    pub daylight_hours: String,
    pub city_size: String,
}

impl From<CityTags> for CityTagsResponse {
    fn from(tags: CityTags) -> Self {
        Self {
            city_id: tags.city_id,
            cloud_coverage: tags.cloud_coverage,
            humidity: tags.humidity,
            temperature: tags.temperature,
            precipitation: tags.precipitation,
            air_quality: tags.air_quality,
            daylight_hours: tags.daylight_hours,
            city_size: tags.city_size,
        }
    }
}
