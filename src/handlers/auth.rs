use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::{
    auth,
    error::AppError,
    models::user::{Credentials, TokenResponse, User},
    AppState,
};

/// Register a new account and issue a token for it. The username's
/// uniqueness is enforced by the store; a duplicate surfaces as a
/// constraint violation and maps to 409.
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<TokenResponse>, AppError> {
    let Json(creds) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(creds.password.as_bytes(), &salt)?
        .to_string();

    sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
        .bind(&creds.username)
        .bind(&password_hash)
        .execute(&state.db)
        .await?;

    tracing::info!("registered user {}", creds.username);

    let token = auth::issue_token(&state.keys, &creds.username).map_err(AppError::TokenCreation)?;
    Ok(Json(TokenResponse { token }))
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<TokenResponse>, AppError> {
    let Json(creds) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash FROM users WHERE username = ?",
    )
    .bind(&creds.username)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::UnknownUser)?;

    let parsed_hash = PasswordHash::new(&user.password_hash)?;
    Argon2::default()
        .verify_password(creds.password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::LoginFail)?;

    let token = auth::issue_token(&state.keys, &user.username).map_err(AppError::TokenCreation)?;
    Ok(Json(TokenResponse { token }))
}
