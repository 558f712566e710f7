/// A catalog city. Reference data, never written by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub city_id: i64,
    pub city_name: String,
    pub continent: String,
    /// ISO 3166-1 alpha-3 country code.
    pub country_3_code: String,
}

/// Descriptive tags of a city, one row per city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityTags {
    pub city_id: i64,
    pub cloud_coverage: String,
    pub humidity: String,
    pub temperature: String,
    pub precipitation: String,
    pub air_quality: String,
    pub daylight_hours: String,
    pub city_size: String,
}

/// One page of cities plus the offset a client passes to fetch the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitiesPage {
    pub cities: Vec<City>,
    pub next_offset: u64,
}
