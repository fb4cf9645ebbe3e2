use colored::*;
use querybot_core::InteractionState;

/// Print the outcome of the last operation from the interaction state:
/// the error when one is set, otherwise the backend's answer.
pub fn render_state(state: &InteractionState) {
    if !state.error_message.is_empty() {
        print_error(&state.error_message);
    } else if !state.response_text.is_empty() {
        print_bot_response(&state.response_text);
    }
}

/// Print the backend's answer with a colored prefix
pub fn print_bot_response(response: &str) {
    println!("{}: {}", "Bot".blue().bold(), response);
}

/// Print a failure message to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

/// Print the transient confirmation returned by an index trigger
pub fn print_index_notice(message: &str) {
    println!("{} {}", "Index:".green().bold(), message);
}

/// Show usage instructions when no prompt or action is provided
pub fn print_usage_instructions() {
    println!("{}", "Usage:".yellow().bold());
    println!("  {}", "querybot \"your question\"".green().bold());
    println!("    Send a single question to the query backend");
    println!();
    println!("  {}", "querybot -i".green().bold());
    println!("    Start an interactive session with the query backend");
    println!();
    println!("  {}", "querybot --index".green().bold());
    println!("    Ask the backend to rebuild its document index");
    println!();
    println!("{}", "Options:".cyan());
    println!("  --base-url <URL>  Backend endpoint (default http://localhost:8000)");
    println!("  --help            Show this help message");
    println!();
}
