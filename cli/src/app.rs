use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use querybot_core::{InteractionController, QueryBackend};
use std::io::{self, Write};
use std::time::Duration;

use crate::output::{print_index_notice, render_state};

fn new_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner} {msg}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// Runs a single query mode, sending one question to the backend and displaying the answer
pub async fn run_single_query<B: QueryBackend>(
    prompt: String,
    controller: &mut InteractionController<B>,
) -> Result<()> {
    info!("Running single query: {}", prompt);

    // Display a spinner while waiting for response
    let spinner = new_spinner("Asking the query service...");
    controller.submit_query(&prompt).await;
    spinner.finish_and_clear();

    render_state(controller.state());
    Ok(())
}

/// Runs an interactive chat session against the query backend
pub async fn run_interactive_chat<B: QueryBackend>(
    controller: &mut InteractionController<B>,
) -> Result<()> {
    println!("Starting interactive session with the query backend.");
    println!("Type 'exit' or 'quit' to end the session.");
    println!();

    loop {
        // Prompt for user input
        print!("{}: ", "You".green().bold());
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .context("Failed to read input")?;

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        // Check for exit command
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("Exiting session.");
            break;
        }

        // Display a spinner while waiting for response
        let spinner = new_spinner("Asking the query service...");
        controller.submit_query(input).await;
        spinner.finish_and_clear();

        render_state(controller.state());
        println!(); // Add spacing between interactions
    }

    Ok(())
}

/// Triggers a backend re-index and reports the confirmation or failure
pub async fn run_index<B: QueryBackend>(controller: &mut InteractionController<B>) -> Result<()> {
    info!("Triggering backend re-index");

    let spinner = new_spinner("Rebuilding the document index...");
    let notice = controller.trigger_indexing().await;
    spinner.finish_and_clear();

    match notice {
        Some(message) => print_index_notice(&message),
        None => render_state(controller.state()),
    }
    Ok(())
}
