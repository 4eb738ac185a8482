use std::path::Path;

use super::load_checked;
use crate::clients;
use crate::config::Scope;
use crate::core::job::load_untested;
use crate::errors::AppResult;
use crate::ui::messages::{header, success};
use crate::ui::table::render_untested;

/// Handle the `check` command: list untested people without messaging anyone.
pub fn handle(path: &Path) -> AppResult<()> {
    let cfg = load_checked(path, Scope::Sheets)?;

    let http = clients::http_client()?;
    let sheets = clients::sheets(&http, &cfg, path)?;

    let untested = load_untested(&sheets)?;
    if untested.is_empty() {
        success("Everyone has submitted a test result");
        return Ok(());
    }

    header(format!("{} untested", untested.len()));
    print!("{}", render_untested(&untested));
    Ok(())
}
