use std::path::Path;

use super::load_checked;
use crate::clients;
use crate::config::Scope;
use crate::core::RosterSink;
use crate::core::job::load_roster;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `sync` command: refresh the names column only.
pub fn handle(path: &Path) -> AppResult<()> {
    let cfg = load_checked(path, Scope::Full)?;

    let http = clients::http_client()?;
    let sheets = clients::sheets(&http, &cfg, path)?;
    let slack = clients::slack(&http, &cfg);

    let roster = load_roster(&slack, &cfg.deny_list())?;
    sheets.write_names(&roster.names)?;

    success(format!("Synced {} names to the sheet", roster.names.len()));
    Ok(())
}
