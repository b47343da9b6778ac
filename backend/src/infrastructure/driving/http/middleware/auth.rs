use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{request::Parts, StatusCode};
use jsonwebtoken::{decode, DecodingKey, Validation};
use uuid::Uuid;

use crate::application::admin::commands::login::AdminClaims;
use crate::infrastructure::AppState;

/// Extractor for handlers behind the admin API. Rejects requests without
/// a valid bearer token signed with the configured secret.
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub id: Uuid,
    pub username: String,
}

// The admin API reports auth failures as 403, matching the JSON
// endpoints' error contract.
fn rejection(message: &str) -> (StatusCode, String) {
    (StatusCode::FORBIDDEN, message.to_string())
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedAdmin {
    type Rejection = (StatusCode, String);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .ok_or_else(|| rejection("Missing or invalid Authorization header"))?;

        let token_data = decode::<AdminClaims>(
            token,
            &DecodingKey::from_secret(state.settings.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| rejection("Invalid token"))?;

        let claims = token_data.claims;
        let id = Uuid::parse_str(&claims.sub)
            .map_err(|_| rejection("Invalid user id in token"))?;

        Ok(AuthenticatedAdmin {
            id,
            username: claims.username,
        })
    }
}
