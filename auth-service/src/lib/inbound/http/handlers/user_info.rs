use auth::ClaimSet;
use auth::Identity;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Identity behind the bearer token, or `null` when the user is gone.
pub async fn user_info(
    State(state): State<AppState>,
    Extension(claims): Extension<ClaimSet>,
) -> Result<ApiSuccess<Option<UserInfoData>>, ApiError> {
    state
        .auth_service
        .get_current_user(&claims)
        .await
        .map_err(ApiError::from)
        .map(|identity| {
            ApiSuccess::new(StatusCode::OK, identity.as_ref().map(UserInfoData::from))
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoData {
    pub id: String,
    pub user_name: String,
    pub role: String,
}

impl From<&Identity> for UserInfoData {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            user_name: identity.user_name.clone(),
            role: identity.role.to_string(),
        }
    }
}
