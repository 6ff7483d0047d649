pub mod cli;
pub mod environment;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_range, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use toml_config::ClientSettings;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "armkit", version)]
#[command(about = "Inspect and manage Azure Resource Manager resources")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Resource manager endpoint, overrides --environment")]
    pub endpoint: Option<String>,

    #[arg(long, global = true, help = "Cloud environment: public, china or usgovernment")]
    pub environment: Option<String>,

    #[arg(long, global = true, help = "Path to a TOML settings file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub retry_attempts: Option<u32>,

    #[arg(long, global = true, help = "Give up waiting on long-running operations after this many seconds")]
    pub poll_timeout_seconds: Option<u64>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Parse a resource ID and print its components.
    ParseId {
        #[arg(value_enum)]
        kind: IdKind,
        id: String,
        #[arg(long, help = "Accept fixed segments in any casing")]
        insensitively: bool,
    },
    /// Fetch a resource by ID.
    Get { id: String },
    /// List the resource groups in a subscription.
    ListResourceGroups {
        subscription_id: String,
        #[arg(long)]
        filter: Option<String>,
        #[arg(long)]
        top: Option<u32>,
    },
    /// Delete a resource by ID.
    Delete {
        id: String,
        #[arg(long, help = "Wait for long-running deletions to finish")]
        wait: bool,
    },
    /// Start, power off or restart a virtual machine.
    Vm {
        #[arg(value_enum)]
        action: VmAction,
        id: String,
        #[arg(long, help = "Power off without a graceful shutdown")]
        skip_shutdown: bool,
        #[arg(long, help = "Return once the operation has been accepted")]
        no_wait: bool,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdKind {
    Subscription,
    ResourceGroup,
    Scope,
    StorageAccount,
    VirtualMachine,
    VirtualNetwork,
    Subnet,
    DnsZone,
    RecordSet,
    RoleAssignment,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VmAction {
    Start,
    PowerOff,
    Restart,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Settings from `--config` (or defaults) with command-line flags applied on top.
    pub fn client_settings(&self) -> Result<ClientSettings> {
        let mut settings = match &self.config {
            Some(path) => ClientSettings::from_file(path)?,
            None => ClientSettings::default(),
        };

        if let Some(environment) = &self.environment {
            settings.environment.name = Some(environment.clone());
        }
        if let Some(endpoint) = &self.endpoint {
            settings.environment.endpoint = Some(endpoint.clone());
        }
        if let Some(attempts) = self.retry_attempts {
            settings.client.retry_attempts = Some(attempts);
        }
        if let Some(timeout) = self.poll_timeout_seconds {
            settings.polling.timeout_seconds = Some(timeout);
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.endpoint {
            validate_url("endpoint", endpoint)?;
        }
        if let Some(environment) = &self.environment {
            environment.parse::<environment::Environment>()?;
        }
        if let Some(attempts) = self.retry_attempts {
            validate_range("retry_attempts", attempts, 0, 10)?;
        }
        if let Command::ListResourceGroups { top: Some(top), .. } = &self.command {
            validate_range("top", *top, 1, 1000)?;
        }
        Ok(())
    }
}
