use clap::Parser;
use colored::*;
use dotenvy::dotenv;
use log::LevelFilter;
use querybot_core::config::QuerybotConfig;
use querybot_core::{InteractionController, QueryBotClient};
use std::error::Error;

// Modules used by the CLI
mod app;
mod cli;
mod logging;
mod output;

use crate::cli::Args;
use crate::logging::{log_error, log_info};
use crate::output::print_usage_instructions;

/// Main function - Connects to the query backend and sends user actions
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables (for QUERYBOT_BASE_URL overrides)
    dotenv().ok();

    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration from the default location
    let config = match QuerybotConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log_error(&format!("Failed to load configuration: {}", e));
            eprintln!("{}", format!("Error loading configuration: {}", e).red());
            return Err(e.into());
        }
    };

    // Get log level from config or use default; --verbose wins
    let log_level = if args.verbose {
        LevelFilter::Debug
    } else {
        config
            .log_level
            .as_deref()
            .map(|level| match level.to_lowercase().as_str() {
                "trace" => LevelFilter::Trace,
                "debug" => LevelFilter::Debug,
                "info" => LevelFilter::Info,
                "warn" => LevelFilter::Warn,
                "error" => LevelFilter::Error,
                _ => LevelFilter::Info,
            })
            .unwrap_or(LevelFilter::Info)
    };

    // Initialize logger with configured log level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level.to_string()),
    )
    .init();

    // Command-line overrides take precedence over the config file
    let config = config.merge(&QuerybotConfig {
        base_url: args.base_url.clone(),
        user_id: None,
        log_level: None,
    });

    // Initialize the backend gateway and interaction controller
    let client = QueryBotClient::new(&config);
    log_info(&format!("Using query backend at {}", client.base_url()));
    let mut controller = InteractionController::new(client, config.resolved_user_id());

    // Call app logic based on arguments
    if args.index {
        if let Err(e) = crate::app::run_index(&mut controller).await {
            log_error(&format!("Error triggering re-index: {}", e));
            eprintln!("{}", format!("Re-index failed: {}", e).red());
        }
    } else if args.interactive {
        if let Err(e) = crate::app::run_interactive_chat(&mut controller).await {
            log_error(&format!("Error in interactive session: {}", e));
            eprintln!("{}", format!("Interactive session failed: {}", e).red());
        }
    } else if let Some(prompt) = args.prompt.clone() {
        if let Err(e) = crate::app::run_single_query(prompt, &mut controller).await {
            log_error(&format!("Error processing prompt: {}", e));
            // Error is already printed in run_single_query
        }
    } else {
        // No prompt and no action, show usage
        print_usage_instructions();
    }

    Ok(())
}
