use std::time::Duration;

use poem::{
    Endpoint, EndpointExt, IntoResponse, Response, Route, Server as PoemServer,
    endpoint::make_sync, get, listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::api::error::{ApiError, ClientError};
use crate::api::health::routes::health_check;
use crate::api::middleware::{Heartbeat, RequestTimeout};
use crate::api::security::{BearerAuth, document_bearer_auth};
use crate::config::auth_config::AuthConfig;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

pub struct Server;

impl Server {
    /// Assembles routes and middleware.
    ///
    /// Outermost first: liveness probe, request logging, CORS, request timeout,
    /// then per-route bearer authentication on `/v0`. Errors are turned into
    /// the JSON envelope both inside and outside CORS.
    pub fn build_app(config: AppConfig, container: DependencyContainer) -> impl Endpoint {
        let api_service = OpenApiService::new(
            container.city_api,
            "City Tags API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}/v0", config.server.bind_address()));
        let ui = api_service.swagger_ui();
        let spec = openapi_document(api_service.spec(), &config.auth);

        Route::new()
            .nest("/v0", api_service.with(BearerAuth::new(&config.auth)))
            .at("/health", get(health_check).data(container.health_probe))
            .nest("/swagger", ui)
            .at(
                "/openapi.json",
                get(make_sync(move |_| {
                    Response::builder()
                        .content_type("application/json; charset=utf-8")
                        .body(spec.clone())
                })),
            )
            .catch_all_error(fallback_error)
            .with(RequestTimeout::new(config.server.request_timeout))
            .with(config.cors)
            // CORS rejections bypass the inner fallback.
            .catch_all_error(fallback_error)
            .with(Tracing)
            .with(Heartbeat::new("/ping"))
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::build_app(config, container);

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/swagger", addr);
        PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(app, shutdown_signal(), Some(SHUTDOWN_GRACE))
            .await?;
        Ok(())
    }
}

/// The generated document, plus the bearer scheme when tokens are enforced.
fn openapi_document(document: String, auth: &AuthConfig) -> String {
    if auth.secret.is_none() {
        return document;
    }
    match document_bearer_auth(&document) {
        Ok(decorated) => decorated,
        Err(e) => {
            tracing::warn!("Could not add the bearer scheme to the OpenAPI document: {e}");
            document
        }
    }
}

/// Turns errors raised by routing or CORS (unknown path, wrong method,
/// disallowed origin) into the standard error envelope.
async fn fallback_error(err: poem::Error) -> Response {
    let status = err.status();
    let api_error = if status.is_server_error() {
        ApiError::internal(&err)
    } else {
        ClientError::new(status, status.canonical_reason().unwrap_or("Request failed"))
            .with_log_message(err.to_string())
            .into()
    };
    api_error.into_response()
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received, draining connections"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use poem::http::StatusCode;
    use poem::middleware::Cors;
    use poem::test::TestClient;
    use serde_json::json;

    use business::domain::city::model::{City, CityTags};
    use business::domain::city::pagination::PageRequest;
    use business::domain::city::repository::CityRepository;
    use business::domain::errors::RepositoryError;
    use business::domain::health::model::DatabaseHealth;
    use business::domain::health::services::HealthProbeService;

    use super::*;
    use crate::config::auth_config::AuthConfig;
    use crate::config::server_config::ServerConfig;

    const SECRET: &str = "integration-secret";

    struct InMemoryCityRepository {
        cities: Vec<City>,
        tags: Vec<CityTags>,
    }

    #[async_trait]
    impl CityRepository for InMemoryCityRepository {
        async fn get_page(&self, page: PageRequest) -> Result<Vec<City>, RepositoryError> {
            Ok(self
                .cities
                .iter()
                .skip(page.offset() as usize)
                .take(page.limit() as usize)
                .cloned()
                .collect())
        }

        async fn get_by_id(&self, city_id: i64) -> Result<City, RepositoryError> {
            self.cities
                .iter()
                .find(|c| c.city_id == city_id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }

        async fn get_tags(&self, city_id: i64) -> Result<CityTags, RepositoryError> {
            self.tags
                .iter()
                .find(|t| t.city_id == city_id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }
    }

    struct UnreachableCityRepository;

    #[async_trait]
    impl CityRepository for UnreachableCityRepository {
        async fn get_page(&self, _: PageRequest) -> Result<Vec<City>, RepositoryError> {
            Err(RepositoryError::database_error("connection refused"))
        }

        async fn get_by_id(&self, _: i64) -> Result<City, RepositoryError> {
            Err(RepositoryError::database_error("connection refused"))
        }

        async fn get_tags(&self, _: i64) -> Result<CityTags, RepositoryError> {
            Err(RepositoryError::database_error("connection refused"))
        }
    }

    struct HealthyProbe;

    #[async_trait]
    impl HealthProbeService for HealthyProbe {
        async fn check(&self) -> DatabaseHealth {
            DatabaseHealth::up(1, 1)
        }
    }

    fn city(city_id: i64, city_name: &str) -> City {
        City {
            city_id,
            city_name: city_name.to_string(),
            continent: "South America".to_string(),
            country_3_code: "ARG".to_string(),
        }
    }

    fn seeded_repository() -> InMemoryCityRepository {
        InMemoryCityRepository {
            cities: vec![
                city(3838859, "Río Gallegos"),
                city(3430443, "Necochea"),
                city(3430988, "Luján"),
            ],
            tags: vec![CityTags {
                city_id: 3838859,
                cloud_coverage: "partly cloudy".to_string(),
                humidity: "dry".to_string(),
                temperature: "cold".to_string(),
                precipitation: "low".to_string(),
                air_quality: "good".to_string(),
                daylight_hours: "long".to_string(),
                city_size: "medium".to_string(),
            }],
        }
    }

    fn client_with(
        repository: Arc<dyn CityRepository>,
        secret: Option<&str>,
    ) -> TestClient<impl Endpoint> {
        client_with_cors(repository, secret, Cors::new())
    }

    fn client_with_cors(
        repository: Arc<dyn CityRepository>,
        secret: Option<&str>,
        cors: Cors,
    ) -> TestClient<impl Endpoint> {
        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                request_timeout: Duration::from_secs(5),
            },
            cors,
            auth: AuthConfig {
                secret: secret.map(str::to_string),
            },
        };
        let container = DependencyContainer::from_ports(repository, Arc::new(HealthyProbe));
        TestClient::new(Server::build_app(config, container))
    }

    fn client() -> TestClient<impl Endpoint> {
        client_with(Arc::new(seeded_repository()), None)
    }

    fn bearer(secret: &str) -> String {
        let token = encode(
            &Header::default(),
            &json!({"sub": "integration"}),
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();
        format!("Bearer {token}")
    }

    #[tokio::test]
    async fn should_answer_ping_with_pong() {
        let resp = client().get("/ping").send().await;

        resp.assert_status_is_ok();
        resp.assert_text("pong").await;
    }

    #[tokio::test]
    async fn should_return_whole_catalog_and_next_offset_by_default() {
        let resp = client().get("/v0/cities").send().await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({
            "cities": [
                {"city_id": 3838859, "city_name": "Río Gallegos", "continent": "South America", "country_3_code": "ARG"},
                {"city_id": 3430443, "city_name": "Necochea", "continent": "South America", "country_3_code": "ARG"},
                {"city_id": 3430988, "city_name": "Luján", "continent": "South America", "country_3_code": "ARG"}
            ],
            "offset": 3
        }))
        .await;
    }

    #[tokio::test]
    async fn should_page_one_city_at_a_time() {
        let resp = client()
            .get("/v0/cities")
            .query("offset", &1)
            .query("limit", &1)
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({
            "cities": [
                {"city_id": 3430443, "city_name": "Necochea", "continent": "South America", "country_3_code": "ARG"}
            ],
            "offset": 2
        }))
        .await;
    }

    #[tokio::test]
    async fn should_return_empty_array_past_the_end() {
        let resp = client().get("/v0/cities").query("offset", &10).send().await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({"cities": [], "offset": 10})).await;
    }

    #[tokio::test]
    async fn should_reject_non_numeric_offset_with_field_error() {
        let resp = client()
            .get("/v0/cities")
            .query("offset", &"200a")
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({
            "code": 400,
            "message": "Parameters not present or invalid",
            "errors": {"offset": "Not present or invalid"}
        }))
        .await;
    }

    #[tokio::test]
    async fn should_return_city_by_id() {
        let resp = client().get("/v0/cities/3838859").send().await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({
            "city_id": 3838859,
            "city_name": "Río Gallegos",
            "continent": "South America",
            "country_3_code": "ARG"
        }))
        .await;
    }

    #[tokio::test]
    async fn should_answer_404_for_unknown_city() {
        let resp = client().get("/v0/cities/38388599").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_json(json!({"code": 404, "message": "City not found"}))
            .await;
    }

    #[tokio::test]
    async fn should_answer_400_for_non_numeric_city_id() {
        let resp = client().get("/v0/cities/incorrectCityId").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({
            "code": 400,
            "message": "Parameters not present or invalid",
            "errors": {"cityId": "Not present or invalid"}
        }))
        .await;
    }

    #[tokio::test]
    async fn should_return_all_seven_tags() {
        let resp = client().get("/v0/cities/3838859/tags").send().await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({
            "city_id": 3838859,
            "cloud_coverage": "partly cloudy",
            "humidity": "dry",
            "temperature": "cold",
            "precipitation": "low",
            "air_quality": "good",
            "daylight_hours": "long",
            "city_size": "medium"
        }))
        .await;
    }

    #[tokio::test]
    async fn should_answer_404_for_city_without_tags() {
        let resp = client().get("/v0/cities/3430443/tags").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_hide_database_failures_behind_generic_500() {
        let cli = client_with(Arc::new(UnreachableCityRepository), None);

        let resp = cli.get("/v0/cities/3838859").send().await;

        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        resp.assert_json(json!({"code": 500, "message": "Internal server error"}))
            .await;
    }

    #[tokio::test]
    async fn should_answer_unknown_paths_with_error_envelope() {
        let resp = client().get("/v1/nothing").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_json(json!({"code": 404, "message": "Not Found"}))
            .await;
    }

    #[tokio::test]
    async fn should_require_token_on_city_routes_when_secret_is_set() {
        let cli = client_with(Arc::new(seeded_repository()), Some(SECRET));

        let anonymous = cli.get("/v0/cities").send().await;
        let forged = cli
            .get("/v0/cities")
            .header("Authorization", bearer("not-the-secret"))
            .send()
            .await;
        let signed = cli
            .get("/v0/cities/3838859")
            .header("Authorization", bearer(SECRET))
            .send()
            .await;

        anonymous.assert_status(StatusCode::UNAUTHORIZED);
        anonymous
            .assert_json(json!({"code": 401, "message": "Unauthorized"}))
            .await;
        forged.assert_status(StatusCode::UNAUTHORIZED);
        signed.assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_keep_ping_and_health_public_when_secret_is_set() {
        let cli = client_with(Arc::new(seeded_repository()), Some(SECRET));

        let ping = cli.get("/ping").send().await;
        let health = cli.get("/health").send().await;

        ping.assert_status_is_ok();
        health.assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_answer_disallowed_origin_with_error_envelope() {
        let cli = client_with_cors(
            Arc::new(seeded_repository()),
            None,
            Cors::new().allow_origin("http://allowed.example"),
        );

        let rejected = cli
            .get("/v0/cities")
            .header("Origin", "http://evil.example")
            .send()
            .await;
        let allowed = cli
            .get("/v0/cities")
            .header("Origin", "http://allowed.example")
            .send()
            .await;

        rejected.assert_status(StatusCode::FORBIDDEN);
        rejected
            .assert_json(json!({"code": 403, "message": "Forbidden"}))
            .await;
        allowed.assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_read_signed_zero_offset_as_first_page() {
        let resp = client()
            .get("/v0/cities")
            .query("offset", &"-0")
            .query("limit", &1)
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value().object().get("offset").assert_i64(1);
    }

    #[tokio::test]
    async fn should_document_bearer_scheme_when_secret_is_set() {
        let cli = client_with(Arc::new(seeded_repository()), Some(SECRET));

        let resp = cli.get("/openapi.json").send().await;

        resp.assert_status_is_ok();
        let document: serde_json::Value =
            serde_json::from_str(&resp.0.into_body().into_string().await.unwrap()).unwrap();
        assert_eq!(
            document["components"]["securitySchemes"]["bearerAuth"]["scheme"],
            "bearer"
        );
        assert_eq!(document["security"], json!([{"bearerAuth": []}]));
        assert!(document["paths"].get("/cities").is_some());
    }

    #[tokio::test]
    async fn should_leave_document_unsecured_without_secret() {
        let resp = client().get("/openapi.json").send().await;

        resp.assert_status_is_ok();
        let document: serde_json::Value =
            serde_json::from_str(&resp.0.into_body().into_string().await.unwrap()).unwrap();
        assert!(document.get("security").is_none());
    }
}
