//! OAuth plumbing for the Sheets client.
//!
//! Only the cached-token path is handled: the token file must have been
//! produced once by an interactive authorization. An expired access token is
//! refreshed with the stored refresh token and written back to the cache.

use chrono::{DateTime, Duration, Utc};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::errors::{AppError, AppResult};

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Access tokens this close to expiry are treated as expired.
const EXPIRY_SLACK_SECS: i64 = 10;

/// The `installed` (or `web`) section of a client secret file.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSecret {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

#[derive(Debug, Deserialize)]
struct ClientSecretFile {
    installed: Option<ClientSecret>,
    web: Option<ClientSecret>,
}

/// Cached token, compatible with the layout other OAuth tools write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    refresh_token: Option<String>,
}

impl Token {
    /// A missing expiry (or the zero time some tools write) never expires.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expiry {
            Some(exp) if exp.timestamp() > 0 => exp - Duration::seconds(EXPIRY_SLACK_SECS) <= now,
            _ => false,
        }
    }
}

pub fn load_client_secret(path: &Path) -> AppResult<ClientSecret> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::auth("oauth.load_client_secret", format!("{}: {e}", path.display()))
    })?;
    let file: ClientSecretFile = serde_json::from_str(&content)?;
    file.installed.or(file.web).ok_or_else(|| {
        AppError::auth(
            "oauth.load_client_secret",
            "expected an 'installed' or 'web' section",
        )
    })
}

pub fn load_token(path: &Path) -> AppResult<Token> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::auth(
            "oauth.load_token",
            format!("{}: {e} (authorize this client once to create it)", path.display()),
        )
    })?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_token(path: &Path, token: &Token) -> AppResult<()> {
    log::debug!("Saving token cache to {}", path.display());
    let mut opts = fs::OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o600);
    }
    let mut file = opts.open(path)?;
    file.write_all(serde_json::to_string(token)?.as_bytes())?;
    Ok(())
}

/// Exchange the refresh token for a new access token.
pub fn refresh(http: &Client, secret: &ClientSecret, token: &Token) -> AppResult<Token> {
    let refresh_token = token.refresh_token.as_deref().ok_or_else(|| {
        AppError::auth("oauth.refresh", "token expired and has no refresh token")
    })?;

    let resp = http
        .post(&secret.token_uri)
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", secret.client_id.as_str()),
            ("client_secret", secret.client_secret.as_str()),
        ])
        .send()?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().unwrap_or_default();
        return Err(AppError::auth("oauth.refresh", format!("{status}: {body}")));
    }
    let body: RefreshResponse = resp.json()?;

    Ok(Token {
        access_token: body.access_token,
        token_type: body.token_type.unwrap_or_else(|| token.token_type.clone()),
        // Google only returns a refresh token on the first exchange.
        refresh_token: body.refresh_token.or_else(|| token.refresh_token.clone()),
        expiry: body.expires_in.map(|s| Utc::now() + Duration::seconds(s)),
    })
}

/// Load the cached token, refreshing and re-caching it when expired.
pub fn access_token(http: &Client, credentials: &Path, token_file: &Path) -> AppResult<String> {
    let token = load_token(token_file)?;
    if !token.is_expired(Utc::now()) {
        return Ok(token.access_token);
    }

    log::info!("Access token expired, refreshing");
    let secret = load_client_secret(credentials)?;
    let fresh = refresh(http, &secret, &token)?;
    save_token(token_file, &fresh)?;
    Ok(fresh.access_token)
}
