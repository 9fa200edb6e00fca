use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponseData;
use super::UsernamePasswordInput;
use crate::domain::user::ports::CredentialServicePort;
use crate::inbound::http::router::AppState;

/// Field errors are part of a successful payload, so the status stays 200.
pub async fn register<S: CredentialServicePort>(
    State(state): State<AppState<S>>,
    Json(body): Json<UsernamePasswordInput>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    state
        .credential_service
        .register(body.into())
        .await
        .map_err(ApiError::from)
        .map(|ref response| ApiSuccess::new(StatusCode::OK, response.into()))
}
