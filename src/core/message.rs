//! Notification composer.

use serde::{Deserialize, Serialize};

use super::roster::NameToIdIndex;
use crate::models::{Record, member::mention_token};

/// Fixed lines wrapped around the mentions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageTemplate {
    pub header: String,
    pub hours_line: String,
    pub form_line: String,
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self {
            header: "The following people have not submitted a test result in the past week:"
                .to_string(),
            hours_line: concat!(
                "GT Surveillance Testing Locations & Hours: ",
                "https://health.gatech.edu/coronavirus/testing"
            )
            .to_string(),
            form_line: "Form Link: https://forms.gle/sydSGQpTEgPrGxWy9".to_string(),
        }
    }
}

/// Result of composing a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composed {
    /// Everyone is compliant; nothing must be sent.
    Empty,
    Message {
        text: String,
        /// Untested names with no account id, in input order.
        unresolved: Vec<String>,
    },
}

impl Composed {
    pub fn is_empty(&self) -> bool {
        matches!(self, Composed::Empty)
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Composed::Empty => None,
            Composed::Message { text, .. } => Some(text),
        }
    }
}

/// Compose the reminder for `untested`.
///
/// Layout: header, one mention per resolvable record (input order), hours
/// line, form line; joined with `\n`. Names missing from `index` are skipped
/// and reported back instead of aborting the whole message.
pub fn compose_message(
    untested: &[Record],
    index: &NameToIdIndex,
    template: &MessageTemplate,
) -> Composed {
    if untested.is_empty() {
        return Composed::Empty;
    }

    let mut lines = Vec::with_capacity(untested.len() + 3);
    let mut unresolved = Vec::new();

    lines.push(template.header.clone());
    for record in untested {
        match index.get(&record.name) {
            Some(id) => lines.push(mention_token(id)),
            None => unresolved.push(record.name.clone()),
        }
    }
    lines.push(template.hours_line.clone());
    lines.push(template.form_line.clone());

    Composed::Message {
        text: lines.join("\n"),
        unresolved,
    }
}
