use std::path::Path;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Handle the `init` command: write a configuration template.
pub fn handle(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::template().save(path)?;

    success(format!("Configuration template written to {}", path.display()));
    info(
        "Fill in sheet_id, slack_token and slack_channel_id, then run `testnudge config --check`",
    );
    Ok(())
}
