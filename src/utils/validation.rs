//! Input validation utilities

use crate::constants::{
    oauth_providers, MAX_PASSWORD_LENGTH, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH,
    MIN_USERNAME_LENGTH,
};

/// Validate username format
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    let len = username.chars().count() as u64;
    if len < MIN_USERNAME_LENGTH {
        return Err("Username must be at least 3 characters");
    }
    if len > MAX_USERNAME_LENGTH {
        return Err("Username must be at most 32 characters");
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err("Username can only contain letters, numbers, underscores, and hyphens");
    }
    Ok(())
}

/// Validate email format (basic validation)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err("Invalid email format");
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err("Invalid email format");
    }
    if !domain.contains('.') {
        return Err("Invalid email domain");
    }
    Ok(())
}

/// Validate password length
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    let len = password.chars().count() as u64;
    if len < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 8 characters");
    }
    if len > MAX_PASSWORD_LENGTH {
        return Err("Password must be at most 128 characters");
    }
    Ok(())
}

/// Validate an OAuth provider name
pub fn validate_oauth_provider(provider: &str) -> Result<(), &'static str> {
    if oauth_providers::ALL.contains(&provider) {
        Ok(())
    } else {
        Err("Unsupported OAuth provider")
    }
}

/// Validate a tag after trimming
pub fn validate_tag(tag: &str) -> Result<(), &'static str> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Err("Tag cannot be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tokio_test::{assert_err, assert_ok};

    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("Alice_123").is_ok());
        assert!(validate_username("ab").is_err()); // Too short
        assert!(validate_username("user@name").is_err()); // Invalid character
        assert!(validate_username(&"a".repeat(33)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@localhost").is_err());
        assert!(validate_email("a@b@c.com").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("password").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password(&"x".repeat(129)).is_err());
    }

    #[test]
    fn test_validate_oauth_provider() {
        assert_ok!(validate_oauth_provider("google"));
        assert_ok!(validate_oauth_provider("facebook"));
        assert_err!(validate_oauth_provider("github"));
    }

    #[test]
    fn test_validate_tag() {
        assert_ok!(validate_tag(" Arrays "));
        assert_err!(validate_tag("   "));
        assert_ok!(validate_tag(&"t".repeat(200)));
    }
}
