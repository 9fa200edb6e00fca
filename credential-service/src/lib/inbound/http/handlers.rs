use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::FieldError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserResponse;
use crate::user::errors::UserError;

pub mod hello;
pub mod login;
pub mod register;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

/// Every `UserError` is a fault the caller cannot fix; field errors never get here.
impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        tracing::error!(error = %err, "Credential operation failed");
        ApiError::InternalServerError("Internal server error".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Request body shared by register and login
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct UsernamePasswordInput {
    username: String,
    password: String,
}

impl From<UsernamePasswordInput> for Credentials {
    fn from(input: UsernamePasswordInput) -> Self {
        Credentials::new(input.username, input.password)
    }
}

/// Wire form of [`UserResponse`]: absent sides are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponseData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldErrorData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserData>,
}

impl From<&UserResponse> for UserResponseData {
    fn from(response: &UserResponse) -> Self {
        match response {
            UserResponse::Errors(errors) => Self {
                errors: Some(errors.iter().map(FieldErrorData::from).collect()),
                user: None,
            },
            UserResponse::User(user) => Self {
                errors: None,
                user: Some(user.into()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrorData {
    pub field: String,
    pub message: String,
}

impl From<&FieldError> for FieldErrorData {
    fn from(error: &FieldError) -> Self {
        Self {
            field: error.field.clone(),
            message: error.message.clone(),
        }
    }
}

/// Public view of a user. The password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            username: user.username.as_str().to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
