//! seo-metagen - batch SEO meta description generator
//!
//! Reads a product CSV, generates a meta description per row, writes the
//! enriched CSV.

#![allow(missing_docs)]

use clap::Parser;
use seo_metagen::config::load_dotenv;
use seo_metagen::utils::logging::init_logging;
use seo_metagen::{Cli, Config, NAME, Pipeline, build_info};
use std::process::ExitCode;
use tracing::{debug, error};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logging depends on the configuration, so setup errors go to stderr
    let config = match load_config().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let info = build_info();
    debug!(
        version = info.version,
        git_hash = info.git_hash,
        build_time = info.build_time,
        rust_version = info.rust_version,
        "Starting {}",
        NAME
    );
    debug!("Configuration: {:?}", config);

    let result = match Pipeline::new(config) {
        Ok(pipeline) => pipeline.run().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(summary) => {
            println!(
                "Meta descriptions written to {}",
                summary.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Run aborted: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn load_config() -> seo_metagen::Result<Config> {
    load_dotenv()?;
    let cli = Cli::parse();
    Config::load(cli).await
}
