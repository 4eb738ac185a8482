use serde::{Deserialize, Serialize};

/// One messaging-platform account taken from a channel member listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberIdentity {
    pub id: String,
    pub real_name: String,
}

impl MemberIdentity {
    pub fn new(id: impl Into<String>, real_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            real_name: real_name.into(),
        }
    }
}

/// Platform-specific mention token rendered as a user reference.
pub fn mention_token(id: &str) -> String {
    format!("<@{}>", id)
}
