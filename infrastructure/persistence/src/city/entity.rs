use sqlx::FromRow;

use business::domain::city::model::{City, CityTags};

#[derive(Debug, FromRow)]
pub struct CityEntity {
    pub city_id: i64,
    pub city_name: String,
    pub continent: String,
    pub country_3_code: String,
}

impl CityEntity {
    pub fn into_domain(self) -> City {
        City {
            city_id: self.city_id,
            city_name: self.city_name,
            continent: self.continent,
            country_3_code: self.country_3_code,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct CityTagsEntity {
    pub city_id: i64,
    pub cloud_coverage: String,
    pub humidity: String,
    pub temperature: String,
    pub precipitation: String,
    pub air_quality: String,
    pub daylight_hours: String,
    pub city_size: String,
}

impl CityTagsEntity {
    pub fn into_domain(self) -> CityTags {
        CityTags {
            city_id: self.city_id,
            cloud_coverage: self.cloud_coverage,
            humidity: self.humidity,
            temperature: self.temperature,
            precipitation: self.precipitation,
            air_quality: self.air_quality,
            daylight_hours: self.daylight_hours,
            city_size: self.city_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_city_row_to_domain() {
        let entity = CityEntity {
            city_id: 3838859,
            city_name: "Río Gallegos".to_string(),
            continent: "South America".to_string(),
            country_3_code: "ARG".to_string(),
        };

        let city = entity.into_domain();

        assert_eq!(city.city_id, 3838859);
        assert_eq!(city.city_name, "Río Gallegos");
        assert_eq!(city.country_3_code, "ARG");
    }

    #[test]
    fn should_map_tags_row_field_by_field() {
        let entity = CityTagsEntity {
            city_id: 7,
            cloud_coverage: "a".to_string(),
            humidity: "b".to_string(),
            temperature: "c".to_string(),
            precipitation: "d".to_string(),
            air_quality: "e".to_string(),
            daylight_hours: "f".to_string(),
            city_size: "g".to_string(),
        };

        let tags = entity.into_domain();

        assert_eq!(
            [
                tags.cloud_coverage.as_str(),
                tags.humidity.as_str(),
                tags.temperature.as_str(),
                tags.precipitation.as_str(),
                tags.air_quality.as_str(),
                tags.daylight_hours.as_str(),
                tags.city_size.as_str(),
            ],
            ["a", "b", "c", "d", "e", "f", "g"]
        );
    }
}
