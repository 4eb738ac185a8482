pub mod member;
pub mod record;

pub use member::MemberIdentity;
pub use record::Record;
