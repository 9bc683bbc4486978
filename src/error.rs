use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    Sqlx(sqlx::Error),
    PasswordHash(argon2::password_hash::Error),
    Jwt(jsonwebtoken::errors::Error),
    TokenCreation(jsonwebtoken::errors::Error),
    LoginFail,
    UnknownUser,
    MissingToken,
    NoIdentity,
    RecordNotFound,
    BadRequest(String),
}

impl From<sqlx::Error> for AppError {
    fn from(inner: sqlx::Error) -> Self {
        AppError::Sqlx(inner)
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(inner: argon2::password_hash::Error) -> Self {
        AppError::PasswordHash(inner)
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(inner: jsonwebtoken::errors::Error) -> Self {
        AppError::Jwt(inner)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Sqlx(e) => {
                // Uniqueness is enforced by the store, not pre-checked in
                // handlers, so constraint violations surface here.
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return error_body(StatusCode::CONFLICT, "Record already exists");
                    }
                }
                tracing::error!("database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            AppError::PasswordHash(e) => {
                tracing::error!("password hash error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Password hashing error".to_string(),
                )
            }
            AppError::Jwt(e) => {
                tracing::warn!("token rejected: {}", e);
                (
                    StatusCode::UNAUTHORIZED,
                    "Invalid or expired token".to_string(),
                )
            }
            AppError::TokenCreation(e) => {
                tracing::error!("token signing error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate token".to_string(),
                )
            }
            AppError::LoginFail => (
                StatusCode::UNAUTHORIZED,
                "Invalid username or password".to_string(),
            ),
            AppError::UnknownUser => (
                StatusCode::BAD_REQUEST,
                "No user with the given credentials exists".to_string(),
            ),
            AppError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "Missing or malformed Authorization header".to_string(),
            ),
            AppError::NoIdentity => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not resolve authenticated user".to_string(),
            ),
            AppError::RecordNotFound => (StatusCode::NOT_FOUND, "Record not found".to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        error_body(status, &message)
    }
}

fn error_body(status: StatusCode, message: &str) -> Response {
    let body = Json(json!({
        "status": "error",
        "message": message,
    }));

    (status, body).into_response()
}
