use rand::{distributions::Alphanumeric, rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const TOKEN_LENGTH: usize = 64;

/// Unguessable public identifier used in survey, invitation and report URLs.
///
/// Uniqueness is enforced by the persistence layer's unique constraints;
/// with a 64-character alphanumeric space no retry loop is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn generate() -> Self {
        let token: String = OsRng
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();
        Self(token)
    }

    pub fn from_string(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_are_64_alphanumeric_chars() {
        for _ in 0..100 {
            let token = AccessToken::generate();
            assert_eq!(token.as_str().len(), TOKEN_LENGTH);
            assert!(token.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn generated_tokens_differ() {
        let a = AccessToken::generate();
        let b = AccessToken::generate();
        assert_ne!(a, b);
    }
}
