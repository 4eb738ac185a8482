use std::path::Path;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success, warning};

/// Handle the `config` subcommand
pub fn handle(path: &Path, print_config: bool, check: bool) -> AppResult<()> {
    let cfg = Config::load(path)?;

    if !print_config && !check {
        info(format!("Configuration file: {}", path.display()));
        return Ok(());
    }

    if print_config {
        header("Current configuration");
        println!("{}", serde_yaml::to_string(&cfg.redacted())?);
    }

    if check {
        let issues = cfg.check();
        if issues.is_empty() {
            success("Configuration is valid");
            return Ok(());
        }
        for issue in &issues {
            warning(issue);
        }
        return Err(AppError::Config(format!("{} problem(s) found", issues.len())));
    }

    Ok(())
}
