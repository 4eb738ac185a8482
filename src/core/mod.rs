//! Decision logic: who is untested and what gets sent.
//! Everything here except [`job`] is pure and side-effect free.

pub mod filter;
pub mod job;
pub mod message;
pub mod roster;

pub use filter::filter_untested;
pub use job::{Job, JobOptions, JobReport, MemberDirectory, Notifier, RosterSink, RosterSource};
pub use message::{Composed, MessageTemplate, compose_message};
pub use roster::{NameToIdIndex, Roster, reconcile_members};
