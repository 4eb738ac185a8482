//! Staleness filter: who has not submitted within the window.

use crate::models::Record;

/// Return, in original order, the records whose submission flag is false.
///
/// The window itself is computed upstream (the sheet carries the boolean);
/// no date arithmetic happens here.
pub fn filter_untested(records: &[Record]) -> Vec<Record> {
    records
        .iter()
        .filter(|r| !r.submitted_within_window)
        .cloned()
        .collect()
}
