pub mod check;
pub mod config;
pub mod init;
pub mod run;
pub mod sync;

use std::path::Path;

use crate::config::{Config, Scope};
use crate::errors::{AppError, AppResult};

/// Load the configuration and refuse to go on if the fields `scope` needs
/// are unusable.
pub(crate) fn load_checked(path: &Path, scope: Scope) -> AppResult<Config> {
    let cfg = Config::load(path)?;
    let issues = cfg.check_for(scope);
    if let Some(first) = issues.first() {
        return Err(AppError::Config(format!(
            "{} ({} problem(s); run `testnudge config --check`)",
            first,
            issues.len()
        )));
    }
    Ok(cfg)
}
