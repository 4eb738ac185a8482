//! Slack collaborator: channel member listing and message delivery.

use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::core::{MemberDirectory, Notifier};
use crate::errors::{AppError, AppResult};
use crate::models::MemberIdentity;

const SLACK_API: &str = "https://slack.com/api";
const PAGE_SIZE: &str = "200";

/// One page of `conversations.members`.
#[derive(Debug, Deserialize)]
pub struct MembersPage {
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMetadata {
    #[serde(default)]
    pub next_cursor: String,
}

/// Append the page's ids and return the cursor of the next page, if any.
pub fn absorb_page(ids: &mut Vec<String>, page: MembersPage) -> Option<String> {
    ids.extend(page.members);
    page.response_metadata
        .map(|m| m.next_cursor)
        .filter(|c| !c.is_empty())
}

#[derive(Debug, Deserialize)]
struct UserInfo {
    user: User,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub profile: Option<Profile>,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub real_name: Option<String>,
}

impl User {
    /// Real name, falling back to the profile's, then to the handle.
    pub fn display_name(&self) -> String {
        let non_empty = |s: &Option<String>| s.as_ref().filter(|v| !v.is_empty()).cloned();
        non_empty(&self.real_name)
            .or_else(|| self.profile.as_ref().and_then(|p| non_empty(&p.real_name)))
            .unwrap_or_else(|| self.name.clone())
    }
}

/// Unwrap Slack's `{ "ok": bool, "error": ... }` envelope.
pub fn parse_envelope<T: DeserializeOwned>(op: &str, body: Value) -> AppResult<T> {
    if !body.get("ok").and_then(Value::as_bool).unwrap_or(false) {
        let err = body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown_error");
        return Err(AppError::slack(op, err));
    }
    Ok(serde_json::from_value(body)?)
}

pub struct SlackClient {
    http: Client,
    token: String,
    channel_id: String,
}

impl SlackClient {
    pub fn new(http: Client, token: &str, channel_id: &str) -> Self {
        Self {
            http,
            token: token.to_string(),
            channel_id: channel_id.to_string(),
        }
    }

    fn get<T: DeserializeOwned>(
        &self,
        op: &str,
        method: &str,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let body: Value = self
            .http
            .get(format!("{SLACK_API}/{method}"))
            .bearer_auth(&self.token)
            .query(query)
            .send()?
            .error_for_status()?
            .json()?;
        parse_envelope(op, body)
    }

    /// Ids of everyone in the channel, following cursors.
    pub fn channel_member_ids(&self) -> AppResult<Vec<String>> {
        let mut ids = Vec::new();
        let mut cursor = String::new();
        loop {
            let page: MembersPage = self.get(
                "slack.channel_members",
                "conversations.members",
                &[
                    ("channel", self.channel_id.as_str()),
                    ("limit", PAGE_SIZE),
                    ("cursor", cursor.as_str()),
                ],
            )?;
            match absorb_page(&mut ids, page) {
                Some(next) => cursor = next,
                None => break,
            }
        }
        Ok(ids)
    }

    pub fn user(&self, id: &str) -> AppResult<User> {
        let info: UserInfo = self.get("slack.user_info", "users.info", &[("user", id)])?;
        Ok(info.user)
    }
}

impl MemberDirectory for SlackClient {
    fn list_members(&self) -> AppResult<Vec<MemberIdentity>> {
        self.channel_member_ids()?
            .iter()
            .map(|id| -> AppResult<MemberIdentity> {
                let user = self.user(id)?;
                Ok(MemberIdentity::new(user.id.clone(), user.display_name()))
            })
            .collect()
    }
}

impl Notifier for SlackClient {
    fn send(&self, text: &str) -> AppResult<()> {
        const OP: &str = "slack.post_message";
        let body: Value = self
            .http
            .post(format!("{SLACK_API}/chat.postMessage"))
            .bearer_auth(&self.token)
            .json(&json!({ "channel": self.channel_id, "text": text }))
            .send()?
            .error_for_status()?
            .json()?;
        let _: Value = parse_envelope(OP, body)?;
        Ok(())
    }
}
