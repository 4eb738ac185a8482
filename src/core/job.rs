//! Thin orchestrator wiring the collaborators around the pure core.
//!
//! Order matters: the roster names are written to the sheet before the
//! results are read, so the form dropdown is up to date for the next run.

use std::collections::HashSet;

use super::filter::filter_untested;
use super::message::{Composed, MessageTemplate, compose_message};
use super::roster::{Roster, reconcile_members};
use crate::errors::AppResult;
use crate::models::{MemberIdentity, Record};

/// Reads raw roster rows (zero to four string cells each).
pub trait RosterSource {
    fn read_rows(&self) -> AppResult<Vec<Vec<String>>>;
}

/// Overwrites the name column, one name per row.
pub trait RosterSink {
    fn write_names(&self, names: &[String]) -> AppResult<()>;
}

/// Lists the members of the target channel.
pub trait MemberDirectory {
    fn list_members(&self) -> AppResult<Vec<MemberIdentity>>;
}

/// Delivers a finished message to the target channel.
pub trait Notifier {
    fn send(&self, text: &str) -> AppResult<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JobOptions {
    /// Compose the message but never deliver it.
    pub dry_run: bool,
    /// Do not rewrite the sheet's name column.
    pub skip_sync: bool,
}

/// What a run did, for the CLI to report.
#[derive(Debug, Clone)]
pub struct JobReport {
    pub synced_names: usize,
    pub untested: Vec<Record>,
    pub outcome: Composed,
    pub sent: bool,
}

/// Fetch members and reconcile them against the deny-list.
pub fn load_roster(
    directory: &dyn MemberDirectory,
    deny_list: &HashSet<String>,
) -> AppResult<Roster> {
    let members = directory.list_members()?;
    log::debug!("Fetched {} channel members", members.len());

    let roster = reconcile_members(&members, deny_list);
    for name in &roster.collisions {
        log::warn!(
            "Display name '{}' is shared by several members; the last one listed will be mentioned",
            name
        );
    }
    Ok(roster)
}

/// Read the results snapshot and keep only the people who have not tested.
pub fn load_untested(source: &dyn RosterSource) -> AppResult<Vec<Record>> {
    let rows = source.read_rows()?;
    let records = Record::from_rows(&rows);
    log::debug!("Read {} roster rows", records.len());
    Ok(filter_untested(&records))
}

pub struct Job<'a> {
    pub source: &'a dyn RosterSource,
    pub sink: &'a dyn RosterSink,
    pub directory: &'a dyn MemberDirectory,
    pub notifier: &'a dyn Notifier,
    pub deny_list: HashSet<String>,
    pub template: MessageTemplate,
}

impl Job<'_> {
    pub fn run(&self, opts: JobOptions) -> AppResult<JobReport> {
        log::info!("Loading channel members");
        let roster = load_roster(self.directory, &self.deny_list)?;

        let synced_names = if opts.skip_sync {
            log::info!("Skipping roster sync");
            0
        } else {
            log::info!("Writing {} names to the roster sheet", roster.names.len());
            self.sink.write_names(&roster.names)?;
            roster.names.len()
        };

        log::info!("Reading test results");
        let untested = load_untested(self.source)?;

        let outcome = compose_message(&untested, &roster.index, &self.template);
        let mut report = JobReport {
            synced_names,
            untested,
            outcome,
            sent: false,
        };

        if report.outcome.is_empty() {
            log::info!("No untested names, no message to send");
            return Ok(report);
        }

        if let Composed::Message { unresolved, .. } = &report.outcome {
            for name in unresolved {
                log::warn!("No channel member named '{}', skipping mention", name);
            }
        }

        if opts.dry_run {
            log::info!("Dry run, message not sent");
            return Ok(report);
        }

        if let Some(text) = report.outcome.text() {
            log::info!("Sending reminder to the channel");
            self.notifier.send(text)?;
            report.sent = true;
        }

        Ok(report)
    }
}
