//! Authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use url::Url;
use uuid::Uuid;

use crate::{
    access::OAuthRedirect,
    config::{Config, OAuthConfig},
    constants::OAUTH_STATE_LENGTH,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::{Role, Session, SessionUser, User},
    utils::{
        generate_secure_token, validate_email, validate_oauth_provider, validate_password,
        validate_username,
    },
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub username: String,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user with the default role
    pub async fn register(pool: &PgPool, username: &str, email: &str, password: &str) -> AppResult<User> {
        validate_username(username).map_err(|e| AppError::Validation(e.to_string()))?;
        validate_email(email).map_err(|e| AppError::Validation(e.to_string()))?;
        validate_password(password).map_err(|e| AppError::Validation(e.to_string()))?;

        // Check if username exists
        if UserRepository::find_by_username(pool, username).await?.is_some() {
            return Err(AppError::AlreadyExists("Username already taken".to_string()));
        }

        // Check if email exists
        if UserRepository::find_by_email(pool, email).await?.is_some() {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        let password_hash = Self::hash_password(password)?;

        let user = UserRepository::create(pool, username, email, &password_hash).await?;
        UserRepository::assign_role(pool, &user.id, Role::User).await?;

        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Sign in with email and password
    pub async fn login(pool: &PgPool, config: &Config, email: &str, password: &str) -> AppResult<Session> {
        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        UserRepository::update_last_login(pool, &user.id).await?;

        Self::issue_session(&user, config)
    }

    /// Issue a new token for an existing user
    pub async fn refresh(pool: &PgPool, config: &Config, user_id: &Uuid) -> AppResult<Session> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        Self::issue_session(&user, config)
    }

    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, user_id: &Uuid) -> AppResult<Option<User>> {
        UserRepository::find_by_id(pool, user_id).await
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Rebuild the session a verified token stands for
    pub fn session_from_token(token: &str, secret: &str) -> AppResult<Session> {
        let claims = Self::verify_token(token, secret)?;
        let id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidToken)?;
        let expires_at = chrono::DateTime::from_timestamp(claims.exp, 0).ok_or(AppError::InvalidToken)?;

        Ok(Session {
            access_token: token.to_string(),
            token_type: "Bearer".to_string(),
            expires_at,
            user: SessionUser {
                id,
                email: claims.email,
                username: claims.username,
            },
        })
    }

    /// Authorize URL for an OAuth provider, with a fresh state token
    pub fn oauth_redirect(oauth: &OAuthConfig, provider: &str) -> AppResult<OAuthRedirect> {
        validate_oauth_provider(provider).map_err(|e| AppError::Validation(e.to_string()))?;

        let base = oauth
            .authorize_url(provider)
            .ok_or_else(|| AppError::Validation(format!("Unsupported OAuth provider: {}", provider)))?;

        let mut url = Url::parse(base).map_err(|e| {
            AppError::Configuration(format!("Invalid authorize URL for {}: {}", provider, e))
        })?;

        let state = generate_secure_token(OAUTH_STATE_LENGTH);
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("redirect_uri", &oauth.redirect_url)
            .append_pair("state", &state);

        Ok(OAuthRedirect {
            provider: provider.to_string(),
            url: url.into(),
            state,
        })
    }

    /// Build a signed session for a user
    pub fn issue_session(user: &User, config: &Config) -> AppResult<Session> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(config.jwt.expiry_hours);

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok(Session {
            access_token: token,
            token_type: "Bearer".to_string(),
            expires_at,
            user: SessionUser {
                id: user.id,
                email: user.email.clone(),
                username: user.username.clone(),
            },
        })
    }

    /// Hash password using Argon2
    fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
