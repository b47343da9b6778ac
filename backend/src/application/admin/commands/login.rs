use crate::application::ports::UserRepository;
use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

const SESSION_HOURS: i64 = 12;

pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginResult {
    pub token: String,
    pub display_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    pub username: String,
    pub exp: usize,
}

pub fn hash_password(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| format!("Failed to hash password: {e}"))
}

fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

pub async fn execute<R: UserRepository + ?Sized>(
    users: &R,
    jwt_secret: &str,
    cmd: LoginCommand,
) -> Result<LoginResult, String> {
    // Same error for unknown user and wrong password.
    let rejection = || "Invalid credentials or insufficient permissions".to_string();

    let user = users
        .find_by_username(&cmd.username)
        .await?
        .ok_or_else(rejection)?;
    if !verify_password(&cmd.password, &user.password_hash) {
        return Err(rejection());
    }

    let claims = AdminClaims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        exp: (Utc::now() + Duration::hours(SESSION_HOURS)).timestamp() as usize,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .map_err(|e| format!("Failed to issue session token: {e}"))?;

    Ok(LoginResult { token, display_name: user.display_name })
}
