use std::sync::Arc;

use logger::TracingLogger;
use persistence::city::repository::CityRepositoryPostgres;
use persistence::health::probe::PostgresHealthProbe;

use business::application::city::get_all::GetCitiesUseCaseImpl;
use business::application::city::get_by_id::GetCityByIdUseCaseImpl;
use business::application::city::get_tags::GetCityTagsUseCaseImpl;
use business::domain::city::repository::CityRepository;
use business::domain::health::services::HealthProbeService;
use business::domain::logger::Logger;

use crate::api::city::routes::CityApi;

pub struct DependencyContainer {
    pub city_api: CityApi,
    pub health_probe: Arc<dyn HealthProbeService>,
}

impl DependencyContainer {
    /// Wires the Postgres adapters around the shared pool.
    pub fn new(pool: sqlx::PgPool) -> Self {
        let city_repository = Arc::new(CityRepositoryPostgres::new(pool.clone()));
        let health_probe = Arc::new(PostgresHealthProbe::new(pool));

        Self::from_ports(city_repository, health_probe)
    }

    pub fn from_ports(
        city_repository: Arc<dyn CityRepository>,
        health_probe: Arc<dyn HealthProbeService>,
    ) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        let get_cities_use_case = Arc::new(GetCitiesUseCaseImpl {
            repository: city_repository.clone(),
            logger: logger.clone(),
        });
        let get_city_use_case = Arc::new(GetCityByIdUseCaseImpl {
            repository: city_repository.clone(),
            logger: logger.clone(),
        });
        let get_tags_use_case = Arc::new(GetCityTagsUseCaseImpl {
            repository: city_repository,
            logger,
        });

        let city_api = CityApi::new(get_cities_use_case, get_city_use_case, get_tags_use_case);

        Self {
            city_api,
            health_probe,
        }
    }
}
