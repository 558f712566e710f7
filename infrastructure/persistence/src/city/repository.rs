use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::city::model::{City, CityTags};
use business::domain::city::pagination::PageRequest;
use business::domain::city::repository::CityRepository;
use business::domain::errors::RepositoryError;

use super::entity::{CityEntity, CityTagsEntity};

// Ids are widened to BIGINT so decoding does not depend on the column width.
const CITY_COLUMNS: &str = "city_id::BIGINT AS city_id, city_name, continent, country_3_code";
const TAGS_COLUMNS: &str = "city_id::BIGINT AS city_id, cloud_coverage, humidity, temperature, \
     precipitation, air_quality, daylight_hours, city_size";

pub struct CityRepositoryPostgres {
    pool: PgPool,
}

impl CityRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CityRepository for CityRepositoryPostgres {
    async fn get_page(&self, page: PageRequest) -> Result<Vec<City>, RepositoryError> {
        let sql = format!("SELECT {CITY_COLUMNS} FROM city_tags.cities LIMIT $1 OFFSET $2");
        let entities = sqlx::query_as::<_, CityEntity>(&sql)
            .bind(i64::from(page.limit()))
            .bind(i64::from(page.offset()))
            .fetch_all(&self.pool)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, city_id: i64) -> Result<City, RepositoryError> {
        let sql = format!("SELECT {CITY_COLUMNS} FROM city_tags.cities WHERE city_id = $1");
        let entity = sqlx::query_as::<_, CityEntity>(&sql)
            .bind(city_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::database_error)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_tags(&self, city_id: i64) -> Result<CityTags, RepositoryError> {
        let sql = format!("SELECT {TAGS_COLUMNS} FROM city_tags.city_tags WHERE city_id = $1");
        let entity = sqlx::query_as::<_, CityTagsEntity>(&sql)
            .bind(city_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::database_error)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}
