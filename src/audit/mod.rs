//! Append-only audit trail of data changes
//!
//! Every create, update and delete performed through the services is written
//! to `audit.log` as one JSON object per line, with the entity's state before
//! and after the change. User entries never carry the password hash.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
