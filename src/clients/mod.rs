//! Remote collaborators behind the core's traits.

pub mod oauth;
pub mod sheets;
pub mod slack;

use reqwest::blocking::Client;
use std::path::Path;
use std::time::Duration;

use crate::config::Config;
use crate::errors::AppResult;

pub use sheets::SheetsClient;
pub use slack::SlackClient;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

pub fn http_client() -> AppResult<Client> {
    Ok(Client::builder()
        .timeout(HTTP_TIMEOUT)
        .user_agent(concat!("testnudge/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Sheets client authenticated from the cached OAuth token.
pub fn sheets(http: &Client, cfg: &Config, config_path: &Path) -> AppResult<SheetsClient> {
    let token = oauth::access_token(
        http,
        &cfg.resolve(config_path, &cfg.credentials_file),
        &cfg.resolve(config_path, &cfg.token_file),
    )?;
    Ok(SheetsClient::new(
        http.clone(),
        token,
        &cfg.sheet_id,
        &cfg.sheet_read_range,
        &cfg.sheet_write_range,
    ))
}

pub fn slack(http: &Client, cfg: &Config) -> SlackClient {
    SlackClient::new(http.clone(), &cfg.slack_token, &cfg.slack_channel_id)
}
