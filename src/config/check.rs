//! Configuration validation for `config --check` and before a run.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::Config;

/// A1 notation: a (possibly quoted) sheet name alone, cells alone, or
/// `sheet!cells`. Cells are columns with optional rows, or a row-only span.
static A1_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    let cells = r"(?:[A-Za-z]{1,3}[0-9]*(?::[A-Za-z]{1,3}[0-9]*)?|[0-9]+:[0-9]+)";
    let sheet = r"(?:'[^']+'|[^!':]+)";
    Regex::new(&format!("^(?:{sheet}(?:!{cells})?|{cells})$")).expect("valid A1 regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    Missing(&'static str),
    BadRange { field: &'static str, value: String },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::Missing(field) => write!(f, "missing field '{field}'"),
            ConfigIssue::BadRange { field, value } => {
                write!(f, "field '{field}' is not an A1 range: '{value}'")
            }
        }
    }
}

pub fn is_a1_range(value: &str) -> bool {
    A1_RANGE.is_match(value)
}

/// Which collaborators a command talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Spreadsheet only (`check`).
    Sheets,
    /// Spreadsheet and chat (`run`, `sync`, `config --check`).
    Full,
}

impl Config {
    /// List every problem that would make a full run fail. Empty means usable.
    pub fn check(&self) -> Vec<ConfigIssue> {
        self.check_for(Scope::Full)
    }

    /// Like [`Config::check`], limited to the fields `scope` needs.
    pub fn check_for(&self, scope: Scope) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let mut required = vec![
            ("sheet_id", &self.sheet_id),
            ("sheet_read_range", &self.sheet_read_range),
            ("sheet_write_range", &self.sheet_write_range),
        ];
        if scope == Scope::Full {
            required.push(("slack_token", &self.slack_token));
            required.push(("slack_channel_id", &self.slack_channel_id));
        }
        for (field, value) in required {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::Missing(field));
            }
        }

        for (field, value) in [
            ("sheet_read_range", &self.sheet_read_range),
            ("sheet_write_range", &self.sheet_write_range),
        ] {
            if !value.trim().is_empty() && !is_a1_range(value) {
                issues.push(ConfigIssue::BadRange {
                    field,
                    value: value.clone(),
                });
            }
        }

        issues
    }
}
