use testnudge::core::{Composed, MessageTemplate, NameToIdIndex, compose_message};

mod common;
use common::record;

const HEADER: &str = "The following people have not submitted a test result in the past week:";
const HOURS: &str =
    "GT Surveillance Testing Locations & Hours: https://health.gatech.edu/coronavirus/testing";
const FORM: &str = "Form Link: https://forms.gle/sydSGQpTEgPrGxWy9";

fn index(pairs: &[(&str, &str)]) -> NameToIdIndex {
    pairs.iter().copied().collect()
}

#[test]
fn test_nobody_untested_gives_empty() {
    let out = compose_message(&[], &index(&[("Ann", "U1")]), &MessageTemplate::default());

    assert_eq!(out, Composed::Empty);
    assert!(out.is_empty());
    assert_eq!(out.text(), None);
}

#[test]
fn test_single_mention() {
    let out = compose_message(
        &[record("Ann", false)],
        &index(&[("Ann", "U1")]),
        &MessageTemplate::default(),
    );

    let expected = [HEADER, "<@U1>", HOURS, FORM].join("\n");
    assert_eq!(
        out,
        Composed::Message {
            text: expected,
            unresolved: vec![],
        }
    );
}

#[test]
fn test_unresolved_name_is_skipped() {
    let out = compose_message(
        &[record("Ann", false), record("Bo", false)],
        &index(&[("Ann", "U1")]),
        &MessageTemplate::default(),
    );

    let Composed::Message { text, unresolved } = out else {
        panic!("expected a message");
    };
    assert_eq!(text.matches("<@").count(), 1);
    assert!(text.contains("<@U1>"));
    assert!(!text.contains("Bo"));
    assert_eq!(unresolved, ["Bo"]);
}

#[test]
fn test_nobody_resolves_still_builds_message() {
    let out = compose_message(
        &[record("Zed", false), record("", false)],
        &index(&[("Ann", "U1")]),
        &MessageTemplate::default(),
    );

    let Composed::Message { text, unresolved } = out else {
        panic!("expected a message");
    };
    assert_eq!(text, [HEADER, HOURS, FORM].join("\n"));
    assert_eq!(unresolved, ["Zed", ""]);
}

#[test]
fn test_mentions_follow_untested_order() {
    let out = compose_message(
        &[record("Cy", false), record("Ann", false), record("Bo", false)],
        &index(&[("Ann", "U1"), ("Bo", "U2"), ("Cy", "U3")]),
        &MessageTemplate::default(),
    );

    let text = out.text().expect("message");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1..4], ["<@U3>", "<@U1>", "<@U2>"]);
}

#[test]
fn test_custom_template() {
    let template = MessageTemplate {
        header: "Please test:".into(),
        hours_line: "Hours: 9-5".into(),
        form_line: "Form: https://example.org/form".into(),
    };

    let out = compose_message(&[record("Ann", false)], &index(&[("Ann", "U1")]), &template);

    assert_eq!(
        out.text(),
        Some("Please test:\n<@U1>\nHours: 9-5\nForm: https://example.org/form")
    );
}
