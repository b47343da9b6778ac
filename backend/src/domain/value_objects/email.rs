use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> Result<Self, String> {
        let email = email.into().trim().to_lowercase();
        let Some((local, domain)) = email.split_once('@') else {
            return Err(format!("Invalid email address: {email}"));
        };
        if local.is_empty() || !domain.contains('.') {
            return Err(format!("Invalid email address: {email}"));
        }
        if email.len() > 255 {
            return Err("Email too long".to_string());
        }
        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_lowercases_plain_addresses() {
        let email = Email::new("Jane.Doe@Example.COM").unwrap();
        assert_eq!(email.as_str(), "jane.doe@example.com");
    }

    #[test]
    fn rejects_address_without_at() {
        assert!(Email::new("not-an-email").is_err());
    }

    #[test]
    fn rejects_address_without_dot_in_domain() {
        assert!(Email::new("jane@localhost").is_err());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let email = Email::new("  jane@example.com \n").unwrap();
        assert_eq!(email.as_str(), "jane@example.com");
    }
}
