use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use crate::domain::auth::errors::ValidationError;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::RegistrationRequest;
use crate::domain::auth::models::Username;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterRequestBody>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    state
        .auth_service
        .register(body.try_into_request()?)
        .await
        .map_err(ApiError::from)
        .map(|identity| {
            ApiSuccess::new(
                StatusCode::CREATED,
                RegisterResponseData {
                    user_name: identity.user_name,
                },
            )
        })
}

/// HTTP request body for registration (raw JSON)
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequestBody {
    email: String,
    user_name: String,
    password: String,
    name: String,
}

impl RegisterRequestBody {
    fn try_into_request(self) -> Result<RegistrationRequest, ValidationError> {
        let email = EmailAddress::new(self.email)?;
        let user_name = Username::new(self.user_name)?;
        RegistrationRequest::new(email, user_name, self.password, self.name)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponseData {
    pub user_name: String,
}
