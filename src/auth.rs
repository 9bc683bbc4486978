use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{error::AppError, AppState};

/// Tokens are valid for one year from issuance. There is no revocation
/// list and no refresh flow.
const TOKEN_TTL_DAYS: i64 = 365;

/// Signing and verification keys derived from the process-wide secret,
/// built once at startup and carried in [`AppState`].
#[derive(Clone)]
pub struct Keys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
}

impl Keys {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// The token carries the username, not the numeric user id: the id is
/// re-resolved against the store on every request, so a user row deleted
/// after issuance resolves to no identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub exp: usize,
}

pub fn issue_token(keys: &Keys, username: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = (chrono::Utc::now() + chrono::Duration::days(TOKEN_TTL_DAYS)).timestamp() as usize;
    let claims = Claims {
        username: username.to_string(),
        exp,
    };

    encode(&Header::default(), &claims, &keys.encoding)
}

pub fn verify_token(keys: &Keys, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(token, &keys.decoding, &Validation::default()).map(|data| data.claims)
}

/// Gate for the protected routes: verifies the bearer token's signature
/// and expiry, then hands the claims to the handler through request
/// extensions. Rejects before any handler runs.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers()).ok_or(AppError::MissingToken)?;
    let claims = verify_token(&state.keys, &token)?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();

    (!token.is_empty()).then(|| token.to_string())
}

/// Look up the numeric id for the authenticated username. Any failure
/// (no matching row, store error) is `None`: scoped event lookups under
/// an absent identity match nothing instead of raising.
pub async fn resolve_owner(db: &SqlitePool, claims: &Claims) -> Option<i64> {
    sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE username = ?")
        .bind(&claims.username)
        .fetch_optional(db)
        .await
        .ok()
        .flatten()
}
