//! Domain model for tasklane.
//!
//! These are the in-memory shapes the rule engines consume. They mirror the
//! JSON records returned by the project, task and deal endpoints, so a fetch
//! response can be deserialized straight into them.

pub mod types;

pub use types::*;
