use std::collections::HashSet;
use testnudge::core::reconcile_members;

mod common;
use common::member;

fn no_deny() -> HashSet<String> {
    HashSet::new()
}

#[test]
fn test_names_follow_listing_order() {
    let members = vec![member("U1", "Ann"), member("U2", "Bo"), member("U3", "Cy")];

    let roster = reconcile_members(&members, &no_deny());

    assert_eq!(roster.names, ["Ann", "Bo", "Cy"]);
    for m in &members {
        assert_eq!(roster.index.get(&m.real_name), Some(m.id.as_str()));
    }
    assert!(roster.collisions.is_empty());
}

#[test]
fn test_shared_name_resolves_to_last_member() {
    let members = vec![member("U1", "Sam"), member("U2", "Bo"), member("U3", "Sam")];

    let roster = reconcile_members(&members, &no_deny());

    assert_eq!(roster.names.len(), members.len());
    assert_eq!(roster.index.get("Sam"), Some("U3"));
    assert_eq!(roster.index.len(), 2);
    assert_eq!(roster.collisions, ["Sam"]);
}

#[test]
fn test_repeated_collision_reported_once() {
    let members = vec![
        member("U1", "Sam"),
        member("U2", "Sam"),
        member("U3", "Bo"),
        member("U4", "Sam"),
        member("U5", "Bo"),
    ];

    let roster = reconcile_members(&members, &no_deny());

    assert_eq!(roster.collisions, ["Sam", "Bo"]);
    assert_eq!(roster.index.get("Sam"), Some("U4"));
    assert_eq!(roster.index.get("Bo"), Some("U5"));
}

#[test]
fn test_deny_list_drops_bot_everywhere() {
    let members = vec![
        member("U1", "Ann"),
        member("UBOT", "Reminder Bot"),
        member("U2", "Bo"),
    ];
    let deny: HashSet<String> = ["UBOT".to_string()].into_iter().collect();

    let roster = reconcile_members(&members, &deny);

    assert_eq!(roster.names, ["Ann", "Bo"]);
    assert_eq!(roster.index.get("Reminder Bot"), None);
}

#[test]
fn test_empty_listing() {
    let roster = reconcile_members(&[], &no_deny());

    assert!(roster.names.is_empty());
    assert!(roster.index.is_empty());
}
