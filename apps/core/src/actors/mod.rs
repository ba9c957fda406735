//! Actor layer: one session per host connection, fed through a mailbox.

pub mod messages;
pub mod session;
pub mod traits;
