//! Roster reconciliation: channel members → sheet names + mention index.

use std::collections::{HashMap, HashSet};

use crate::models::MemberIdentity;

/// Display name → account id.
///
/// When two members share a display name the one listed later wins. This
/// matches how the sheet dropdown works (people pick a name, not an id).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameToIdIndex {
    inner: HashMap<String, String>,
}

impl NameToIdIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping, returning the id it replaced (a name collision).
    pub fn insert(&mut self, name: impl Into<String>, id: impl Into<String>) -> Option<String> {
        self.inner.insert(name.into(), id.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<N: Into<String>, I: Into<String>> FromIterator<(N, I)> for NameToIdIndex {
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        let mut index = NameToIdIndex::new();
        for (name, id) in iter {
            index.insert(name, id);
        }
        index
    }
}

/// Output of [`reconcile_members`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    /// Names in listing order, one per sheet row.
    pub names: Vec<String>,
    pub index: NameToIdIndex,
    /// Display names that were seen more than once, each listed once.
    pub collisions: Vec<String>,
}

/// Build the ordered name list and the mention index from a member listing.
///
/// Members whose id is in `deny_list` (bot accounts) are dropped before
/// anything else, so they neither land in the sheet nor get mentioned.
pub fn reconcile_members(members: &[MemberIdentity], deny_list: &HashSet<String>) -> Roster {
    let mut roster = Roster::default();

    for member in members.iter().filter(|m| !deny_list.contains(&m.id)) {
        roster.names.push(member.real_name.clone());
        let replaced = roster
            .index
            .insert(member.real_name.clone(), member.id.clone())
            .is_some();
        if replaced && !roster.collisions.contains(&member.real_name) {
            roster.collisions.push(member.real_name.clone());
        }
    }

    roster
}
