use anyhow::Context;
use armkit::app;
use armkit::domain::ports::ConfigProvider;
use armkit::utils::error::{ArmError, ErrorCategory};
use armkit::utils::{logger, validation::Validate};
use armkit::{CliConfig, EnvironmentAuthorizer, ResourceManagerClient};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(exit_code(&e));
    }

    let result = match app::run_offline(&config.command) {
        Some(result) => result,
        None => match build_client(&config) {
            Ok(client) => app::run(&client, &config.command).await,
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(value) => {
            let output = serde_json::to_string_pretty(&value).context("rendering output")?;
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Command failed: {} (category: {:?})", e, e.category());
            eprintln!("error: {}", e);
            std::process::exit(exit_code(&e));
        }
    }
}

fn build_client(config: &CliConfig) -> armkit::Result<ResourceManagerClient> {
    let settings = config.client_settings()?;
    let authorizer = EnvironmentAuthorizer::from_env()?;
    tracing::info!("Using endpoint {}", settings.endpoint());
    ResourceManagerClient::from_config(&settings, Some(Arc::new(authorizer)))
}

fn exit_code(error: &ArmError) -> i32 {
    match error.category() {
        ErrorCategory::Configuration | ErrorCategory::ResourceId => 2,
        ErrorCategory::Response if error.is_not_found() => 4,
        ErrorCategory::Polling => 5,
        _ => 1,
    }
}
