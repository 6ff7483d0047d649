#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod services;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::EnvironmentAuthorizer;
pub use config::toml_config::ClientSettings;
pub use core::{Client, ResourceId};
pub use services::ResourceManagerClient;
pub use utils::error::{ArmError, Result};
