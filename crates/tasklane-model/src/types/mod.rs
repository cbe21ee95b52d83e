//! Type definitions for the tasklane domain.

mod deals;
mod ids;
mod milestones;
mod organizations;
mod permissions;
mod projects;
mod roles;
mod tasks;

// Re-export all types from submodules
pub use deals::*;
pub use ids::*;
pub use milestones::*;
pub use organizations::*;
pub use permissions::*;
pub use projects::*;
pub use roles::*;
pub use tasks::*;
