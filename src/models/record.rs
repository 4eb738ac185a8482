use serde::Serialize;

/// Literal the sheet's checkbox column renders for a checked box.
pub const TRUTHY_TOKEN: &str = "TRUE";

/// One tracked person's latest known test submission, as read from one
/// roster row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub name: String,
    pub submitted_within_window: bool,
    pub last_submission_date: String,
    pub last_submission_status: String,
}

impl Record {
    /// Build a record from a raw sheet row.
    ///
    /// Rows are positional: name, flag, date, status. Short rows are padded
    /// with defaults and extra cells are ignored, so this never fails. An
    /// empty row yields a placeholder record so that the returned vector
    /// stays aligned with the sheet's row numbers.
    pub fn from_row<S: AsRef<str>>(row: &[S]) -> Self {
        let cell = |i: usize| row.get(i).map(|c| c.as_ref().to_string()).unwrap_or_default();

        Self {
            name: cell(0),
            submitted_within_window: row
                .get(1)
                .is_some_and(|c| c.as_ref() == TRUTHY_TOKEN),
            last_submission_date: cell(2),
            last_submission_status: cell(3),
        }
    }

    /// Parse a whole snapshot, one record per row.
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Vec<Self> {
        rows.iter().map(|r| Self::from_row(r.as_slice())).collect()
    }

    /// True for records produced from empty rows.
    pub fn is_placeholder(&self) -> bool {
        self.name.is_empty()
    }
}
