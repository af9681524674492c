use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pomopad-cli", version, about = "Pomopad CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the timer and notepad interactively (commands on stdin)
    Run(commands::run::RunArgs),
    /// Format a number of seconds as MM:SS
    Format {
        /// Seconds to format
        seconds: u64,
    },
    /// Print the progress dial for a given fraction as JSON
    Render(commands::render::RenderArgs),
    /// List gradient presets as JSON
    Presets,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args).await,
        Commands::Format { seconds } => commands::format::run(seconds),
        Commands::Render(args) => commands::render::run(args),
        Commands::Presets => commands::presets::run(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
