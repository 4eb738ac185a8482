use std::path::Path;

use super::load_checked;
use crate::clients;
use crate::config::Scope;
use crate::core::{Composed, Job, JobOptions};
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};

/// Handle the `run` command: the whole reminder job.
pub fn handle(path: &Path, opts: JobOptions) -> AppResult<()> {
    let cfg = load_checked(path, Scope::Full)?;

    let http = clients::http_client()?;
    let sheets = clients::sheets(&http, &cfg, path)?;
    let slack = clients::slack(&http, &cfg);

    let job = Job {
        source: &sheets,
        sink: &sheets,
        directory: &slack,
        notifier: &slack,
        deny_list: cfg.deny_list(),
        template: cfg.message.clone(),
    };
    let report = job.run(opts)?;

    if report.synced_names > 0 {
        info(format!("Synced {} names to the sheet", report.synced_names));
    }

    match &report.outcome {
        Composed::Empty => success("Everyone has submitted a test result, nothing to send"),
        Composed::Message { text, unresolved } => {
            if !unresolved.is_empty() {
                warning(format!(
                    "{} untested name(s) could not be mentioned: {}",
                    unresolved.len(),
                    unresolved.join(", ")
                ));
            }
            if report.sent {
                success(format!(
                    "Reminder sent for {} untested people",
                    report.untested.len()
                ));
            } else {
                header("Reminder (dry run)");
                println!("{text}");
            }
        }
    }

    Ok(())
}
