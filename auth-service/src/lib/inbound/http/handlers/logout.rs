use axum::http::StatusCode;

use super::ApiSuccess;

/// Logout is advisory. Tokens are not tracked server-side, so the token
/// stays valid until it expires; the client is expected to discard it.
pub async fn logout() -> ApiSuccess<()> {
    ApiSuccess::new(StatusCode::OK, ())
}
