//! Command-line front end: ID detection and command dispatch.

pub mod commands;
pub mod ids;

pub use commands::{run, run_offline};
pub use ids::{AnyResourceId, IdSummary};
