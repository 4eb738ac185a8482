use testnudge::models::Record;

#[test]
fn test_single_field_row_gets_defaults() {
    let r = Record::from_row(&["Cy"]);

    assert_eq!(
        r,
        Record {
            name: "Cy".into(),
            submitted_within_window: false,
            last_submission_date: String::new(),
            last_submission_status: String::new(),
        }
    );
}

#[test]
fn test_full_row() {
    let r = Record::from_row(&["Ann", "TRUE", "10/12/2020", "Negative"]);

    assert_eq!(r.name, "Ann");
    assert!(r.submitted_within_window);
    assert_eq!(r.last_submission_date, "10/12/2020");
    assert_eq!(r.last_submission_status, "Negative");
}

#[test]
fn test_flag_requires_exact_token() {
    for flag in ["true", "True", "FALSE", "1", "yes", " TRUE", ""] {
        let r = Record::from_row(&["Bo", flag]);
        assert!(!r.submitted_within_window, "flag {flag:?} must not count as submitted");
    }
}

#[test]
fn test_extra_cells_are_ignored() {
    let r = Record::from_row(&["Ann", "TRUE", "d", "s", "extra", "more"]);
    assert_eq!(r.last_submission_status, "s");
}

#[test]
fn test_empty_row_is_placeholder() {
    let r = Record::from_row::<&str>(&[]);

    assert!(r.is_placeholder());
    assert_eq!(r, Record::default());
}

#[test]
fn test_rows_keep_sheet_positions() {
    let rows: Vec<Vec<String>> = vec![
        vec!["Ann".into(), "TRUE".into()],
        vec![],
        vec!["Cy".into()],
    ];

    let records = Record::from_rows(&rows);

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].name, "Ann");
    assert!(records[1].is_placeholder());
    assert_eq!(records[2].name, "Cy");
}
