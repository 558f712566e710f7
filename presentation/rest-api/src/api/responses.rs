use poem::http::{StatusCode, header};
use poem::Response;
use serde::Serialize;

const APPLICATION_JSON: &str = "application/json";

/// Serializes `payload` as the JSON body of a `status` response.
///
/// If serialization fails the intended body is dropped and an empty `500`
/// goes out instead; the failure is only logged.
pub fn respond_with_json<T: Serialize>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(body) => Response::builder()
            .status(status)
            .header(header::CONTENT_TYPE, APPLICATION_JSON)
            .body(body),
        Err(err) => {
            tracing::error!("Error when marshaling JSON: {err}");
            Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header(header::CONTENT_TYPE, APPLICATION_JSON)
                .finish()
        }
    }
}
