use clap::Parser;

/// Console client for the product query backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The question to send to the query backend
    #[arg(index = 1)] // Positional argument
    pub prompt: Option<String>,

    /// Enter interactive chat mode
    #[arg(short, long, default_value_t = false)]
    pub interactive: bool,

    /// Ask the backend to rebuild its document index
    #[arg(long, default_value_t = false)]
    pub index: bool,

    /// Base URL of the query backend
    #[arg(long, env = "QUERYBOT_BASE_URL")]
    pub base_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
