use std::collections::HashMap;

use poem::http::StatusCode;

use business::domain::city::pagination::{DEFAULT_LIMIT, DEFAULT_OFFSET, MIN_LIMIT, PageRequest};

use crate::api::error::ClientError;

const INVALID_PARAMETERS: &str = "Parameters not present or invalid";
const INVALID_FIELD: &str = "Not present or invalid";

/// Collects every invalid parameter so one response can report all of them.
#[derive(Default)]
struct FieldErrors {
    fields: HashMap<String, String>,
    log_messages: Vec<String>,
}

impl FieldErrors {
    fn check<T>(&mut self, field: &str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(reason) => {
                self.reject(field, reason);
                None
            }
        }
    }

    fn reject(&mut self, field: &str, reason: String) {
        self.fields.insert(field.to_string(), INVALID_FIELD.to_string());
        self.log_messages.push(format!("{field}: {reason}"));
    }

    fn into_client_error(self) -> ClientError {
        ClientError::new(StatusCode::BAD_REQUEST, INVALID_PARAMETERS)
            .with_log_message(self.log_messages.join(", "))
            .with_field_errors(self.fields)
    }
}

/// Missing or empty values take `default`. Signs are accepted, so `-0` reads
/// as zero.
fn parse_count(raw: Option<&str>, default: u32, min: u32) -> Result<u32, String> {
    let Some(raw) = raw.filter(|v| !v.is_empty()) else {
        return Ok(default);
    };
    let value = raw
        .parse::<i64>()
        .map_err(|e| format!("{raw:?}: {e}"))?;
    if value < i64::from(min) {
        return Err(format!("{value} is below {min}"));
    }
    u32::try_from(value).map_err(|_| format!("{value} is out of range"))
}

/// Parses the `offset`/`limit` query parameters of the city listing.
pub fn parse_cities_query(
    offset: Option<&str>,
    limit: Option<&str>,
) -> Result<PageRequest, ClientError> {
    let mut errors = FieldErrors::default();
    let offset = errors.check("offset", parse_count(offset, DEFAULT_OFFSET, 0));
    let limit = errors.check("limit", parse_count(limit, DEFAULT_LIMIT, MIN_LIMIT));

    offset
        .zip(limit)
        .and_then(|(offset, limit)| PageRequest::new(offset, limit))
        .ok_or_else(|| errors.into_client_error())
}

/// Parses the `cityId` path segment.
pub fn parse_city_id(raw: &str) -> Result<i64, ClientError> {
    raw.parse::<i64>().map_err(|e| {
        ClientError::new(StatusCode::BAD_REQUEST, INVALID_PARAMETERS)
            .with_log_message(format!("cityId {raw:?}: {e}"))
            .with_field_errors(HashMap::from([(
                "cityId".to_string(),
                INVALID_FIELD.to_string(),
            )]))
    })
}
