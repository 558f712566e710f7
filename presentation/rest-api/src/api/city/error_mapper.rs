use business::domain::city::errors::CityError;

use crate::api::error::{ApiError, ClientError};

impl From<CityError> for ApiError {
    fn from(err: CityError) -> Self {
        match err {
            CityError::NotFound => ClientError::not_found("City not found").into(),
            CityError::Repository(cause) => ApiError::internal(cause),
        }
    }
}
