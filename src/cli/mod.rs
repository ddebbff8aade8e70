//! CLI module: command parsing and dispatch
//!
//! All CLI logic lives here. `main.rs` calls `cli::run()`.

pub mod auth;
pub mod common;
pub mod provider;
pub mod refine;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use redactum::config::LoggingConfig;
use redactum::tone::Tone;

#[derive(Parser)]
#[command(name = "redactum")]
#[command(version)]
#[command(about = "Rewrite text in a chosen tone using your LLM provider", long_about = None)]
struct Cli {
    /// Log dispatch details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure a provider and make it active
    Auth {
        /// Provider name (e.g. openai, groq, custom)
        #[arg(long)]
        name: Option<String>,
        /// API key (prompted with hidden input if omitted)
        #[arg(long)]
        api_key: Option<String>,
        /// Model identifier
        #[arg(long)]
        model: Option<String>,
        /// Base URL, e.g. https://api.openai.com/v1
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Choose the active provider
    #[command(name = "use", alias = "set-provider")]
    Use {
        /// Provider to activate (pick from a list if omitted)
        name: Option<String>,
    },
    /// List configured providers
    Providers,
    /// List available tones
    Tones,
    /// Refine text with a tone
    Refine {
        /// Tone to apply
        #[arg(short, long, default_value = "professional")]
        tone: String,
        /// Give up after this many seconds (0 disables the limit)
        #[arg(long, default_value_t = 60)]
        timeout: u64,
        /// Text to refine (read from stdin if omitted)
        text: Vec<String>,
    },
    /// Show version information
    Version,
}

/// Entry point
pub async fn run() -> Result<()> {
    // A .env file may carry REDACTUM_* overrides.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut logging_cfg = LoggingConfig::from_env();
    if cli.verbose {
        logging_cfg.level = "debug".to_string();
    }
    redactum::utils::logging::init_logging(&logging_cfg);

    match cli.command {
        None => {
            let mut cmd = Cli::command();
            cmd.print_help()?;
            println!();
        }
        Some(Commands::Auth {
            name,
            api_key,
            model,
            base_url,
        }) => {
            auth::cmd_auth(auth::AuthArgs {
                name,
                api_key,
                model,
                base_url,
            })?;
        }
        Some(Commands::Use { name }) => {
            provider::cmd_use(name)?;
        }
        Some(Commands::Providers) => {
            provider::cmd_providers()?;
        }
        Some(Commands::Tones) => {
            cmd_tones();
        }
        Some(Commands::Refine {
            tone,
            timeout,
            text,
        }) => {
            refine::cmd_refine(&tone, timeout, text).await?;
        }
        Some(Commands::Version) => {
            cmd_version();
        }
    }

    Ok(())
}

/// Display version information
fn cmd_version() {
    println!("redactum {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Rewrite text in a chosen tone using your LLM provider");
}

/// List every tone with its description
fn cmd_tones() {
    println!("Available tones:");
    for tone in Tone::ALL {
        let marker = if tone == Tone::default() {
            " (default)"
        } else {
            ""
        };
        println!("  {:<16} {}{}", tone.id(), tone.description(), marker);
    }
}
