use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::MessageTemplate;
use crate::errors::{AppError, AppResult};

pub mod check;

pub use check::{ConfigIssue, Scope};

/// Static job configuration, read once at startup.
///
/// The file is YAML. Since JSON is a subset of YAML, a `config.json` using
/// the camelCase keys (`sheetsID`, `slackToken`, ...) loads as well.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(alias = "sheetsID")]
    pub sheet_id: String,
    #[serde(alias = "sheetReadRange")]
    pub sheet_read_range: String,
    #[serde(alias = "sheetWriteRange")]
    pub sheet_write_range: String,

    #[serde(alias = "slackToken")]
    pub slack_token: String,
    #[serde(alias = "slackChannelID")]
    pub slack_channel_id: String,

    /// Member ids never synced nor mentioned (bot accounts).
    pub excluded_member_ids: Vec<String>,

    #[serde(default = "default_credentials_file")]
    pub credentials_file: String,
    #[serde(default = "default_token_file")]
    pub token_file: String,

    pub message: MessageTemplate,
}

fn default_credentials_file() -> String {
    "credentials.json".to_string()
}

fn default_token_file() -> String {
    "token.json".to_string()
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".testnudge")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("testnudge.conf")
    }

    /// Template written by `init`, with every field present.
    pub fn template() -> Self {
        Self {
            sheet_id: String::new(),
            sheet_read_range: "Form Responses 1!A2:D".to_string(),
            sheet_write_range: "Names!A2:A".to_string(),
            slack_token: String::new(),
            slack_channel_id: String::new(),
            excluded_member_ids: Vec::new(),
            credentials_file: default_credentials_file(),
            token_file: default_token_file(),
            message: MessageTemplate::default(),
        }
    }

    /// Load the configuration from `path`.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::ConfigMissing(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Err(AppError::Config("configuration file is empty".into()));
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn deny_list(&self) -> HashSet<String> {
        self.excluded_member_ids.iter().cloned().collect()
    }

    /// Resolve a configured file relative to the directory of the config file.
    pub fn resolve(&self, config_path: &Path, file: &str) -> PathBuf {
        let p = Path::new(file);
        if p.is_absolute() {
            return p.to_path_buf();
        }
        match config_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(p),
            _ => p.to_path_buf(),
        }
    }

    /// Copy safe for printing: secrets are masked.
    pub fn redacted(&self) -> Self {
        let mut cfg = self.clone();
        cfg.slack_token = mask(&cfg.slack_token);
        cfg
    }
}

/// Leading characters of a secret shown by `config --print`.
const MASK_VISIBLE: usize = 5;

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        return String::new();
    }
    if secret.chars().count() <= MASK_VISIBLE {
        return "***".to_string();
    }
    let visible: String = secret.chars().take(MASK_VISIBLE).collect();
    format!("{visible}***")
}
