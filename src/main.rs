use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "voxdial")]
#[command(about = "Voice command dispatcher - open links, apps and calls by voice")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.voxdial/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Platform overrides shared by `resolve` and `listen`
#[derive(Args, Debug, Clone, Default)]
pub struct PlatformArgs {
    /// Treat the device as mobile (prefer app links)
    #[arg(long)]
    mobile: bool,

    /// Treat the device as Android (enables the contact picker)
    #[arg(long)]
    android: bool,

    /// Detect the platform from a browser user agent
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a transcript and print the action without performing it
    Resolve {
        /// The transcript (multiple words are joined with spaces)
        #[arg(required = true)]
        transcript: Vec<String>,

        /// Print the resolution as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        platform: PlatformArgs,
    },

    /// Start listening: dispatch each line read from stdin as an utterance
    Listen {
        /// Print actions instead of performing them
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        platform: PlatformArgs,
    },

    /// List the configured command phrases and contacts
    Commands,

    /// Initialize a new config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::Resolve {
            transcript,
            json,
            platform,
        }) => {
            cli::resolve::resolve_command(config_path, &transcript.join(" "), &platform, json)?;
        }
        Some(Commands::Listen { dry_run, platform }) => {
            cli::listen::listen_command(config_path, &platform, dry_run).await?;
        }
        Some(Commands::Commands) => {
            cli::commands::commands_command(config_path)?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(config_path.map(|p| p.to_path_buf()), force)?;
        }
        None => {
            // Default: listen with the system executor
            cli::listen::listen_command(config_path, &PlatformArgs::default(), false).await?;
        }
    }

    Ok(())
}
