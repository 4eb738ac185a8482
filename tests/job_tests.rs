use std::cell::RefCell;
use std::collections::HashSet;

use testnudge::core::{
    Composed, Job, JobOptions, MemberDirectory, MessageTemplate, Notifier, RosterSink,
    RosterSource,
};
use testnudge::errors::{AppError, AppResult};
use testnudge::models::MemberIdentity;

mod common;
use common::member;

/// In-memory stand-in for both the sheet and the chat workspace.
#[derive(Default)]
struct Fake {
    rows: Vec<Vec<String>>,
    members: Vec<MemberIdentity>,
    fail_read: bool,
    calls: RefCell<Vec<&'static str>>,
    written: RefCell<Vec<String>>,
    sent: RefCell<Vec<String>>,
}

impl RosterSource for Fake {
    fn read_rows(&self) -> AppResult<Vec<Vec<String>>> {
        self.calls.borrow_mut().push("read");
        if self.fail_read {
            return Err(AppError::sheets("sheets.read_roster", "no data in sheet"));
        }
        Ok(self.rows.clone())
    }
}

impl RosterSink for Fake {
    fn write_names(&self, names: &[String]) -> AppResult<()> {
        self.calls.borrow_mut().push("write");
        *self.written.borrow_mut() = names.to_vec();
        Ok(())
    }
}

impl MemberDirectory for Fake {
    fn list_members(&self) -> AppResult<Vec<MemberIdentity>> {
        self.calls.borrow_mut().push("members");
        Ok(self.members.clone())
    }
}

impl Notifier for Fake {
    fn send(&self, text: &str) -> AppResult<()> {
        self.calls.borrow_mut().push("send");
        self.sent.borrow_mut().push(text.to_string());
        Ok(())
    }
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

fn fake() -> Fake {
    Fake {
        rows: vec![
            row(&["Ann", "FALSE", "10/01/2020", "Negative"]),
            row(&["Bo", "TRUE", "10/12/2020", "Negative"]),
            row(&["Cy"]),
        ],
        members: vec![
            member("U1", "Ann"),
            member("U2", "Bo"),
            member("U3", "Cy"),
            member("UBOT", "Nudge"),
        ],
        ..Default::default()
    }
}

fn job(f: &Fake) -> Job<'_> {
    Job {
        source: f,
        sink: f,
        directory: f,
        notifier: f,
        deny_list: HashSet::from(["UBOT".to_string()]),
        template: MessageTemplate::default(),
    }
}

#[test]
fn test_run_syncs_then_reads_then_sends() {
    let f = fake();

    let report = job(&f).run(JobOptions::default()).expect("run");

    assert_eq!(*f.calls.borrow(), ["members", "write", "read", "send"]);
    assert_eq!(*f.written.borrow(), ["Ann", "Bo", "Cy"]);
    assert_eq!(report.synced_names, 3);
    assert_eq!(report.untested.len(), 2);
    assert!(report.sent);

    let sent = f.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].contains("<@U1>\n<@U3>"));
    assert!(!sent[0].contains("<@U2>"));
}

#[test]
fn test_everyone_compliant_sends_nothing() {
    let mut f = fake();
    f.rows = vec![row(&["Ann", "TRUE"]), row(&["Bo", "TRUE"])];

    let report = job(&f).run(JobOptions::default()).expect("run");

    assert_eq!(report.outcome, Composed::Empty);
    assert!(!report.sent);
    assert!(f.sent.borrow().is_empty());
    assert!(!f.calls.borrow().contains(&"send"));
}

#[test]
fn test_dry_run_never_sends() {
    let f = fake();

    let report = job(&f)
        .run(JobOptions {
            dry_run: true,
            skip_sync: false,
        })
        .expect("run");

    assert!(!report.sent);
    assert!(f.sent.borrow().is_empty());
    assert!(report.outcome.text().is_some_and(|t| t.contains("<@U1>")));
}

#[test]
fn test_skip_sync_leaves_sheet_alone() {
    let f = fake();

    let report = job(&f)
        .run(JobOptions {
            dry_run: false,
            skip_sync: true,
        })
        .expect("run");

    assert_eq!(report.synced_names, 0);
    assert!(!f.calls.borrow().contains(&"write"));
    assert!(report.sent);
}

#[test]
fn test_unknown_name_is_reported_not_fatal() {
    let mut f = fake();
    f.rows.push(row(&["Stranger", "FALSE"]));

    let report = job(&f).run(JobOptions::default()).expect("run");

    assert!(report.sent);
    match report.outcome {
        Composed::Message { unresolved, .. } => assert_eq!(unresolved, ["Stranger"]),
        Composed::Empty => panic!("expected a message"),
    }
}

#[test]
fn test_read_failure_aborts_before_send() {
    let mut f = fake();
    f.fail_read = true;

    let err = job(&f).run(JobOptions::default()).unwrap_err();

    assert!(err.to_string().contains("sheets.read_roster"));
    assert!(f.sent.borrow().is_empty());
}
