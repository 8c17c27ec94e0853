mod app;
mod interpret;
mod model;
mod notify;
mod poll;
mod source;

use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, info};
use watcher_core::{telemetry, Config};

#[derive(Parser)]
#[clap(name = "watcher")]
#[clap(about = "Homework review status watcher", version)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll the review API forever, notifying the chat on every change
    Run {
        /// Override the initial window start (RFC3339 format)
        #[clap(long, env = "RUN_FROM")]
        from: Option<chrono::DateTime<chrono::Utc>>,
    },

    /// Run a single poll cycle and exit
    Once {
        /// Override the window start (RFC3339 format)
        #[clap(long, env = "RUN_FROM")]
        from: Option<chrono::DateTime<chrono::Utc>>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "Fatal error");
        process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // A missing secret must be visible even though no subscriber is
    // installed until telemetry::init below.
    let config = Config::load().map_err(|e| {
        eprintln!("Refusing to start: {e}");
        anyhow::anyhow!("Failed to load config: {}", e)
    })?;

    telemetry::init(&config.telemetry)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { from } => {
            info!(from = ?from, "Starting continuous watch");

            let mut app = app::App::new(config, from)?;
            app.run_continuous().await?;
        }

        Commands::Once { from } => {
            let mut app = app::App::new(config, from)?;
            let outcome = app.run_once().await;
            info!(outcome = ?outcome, "Cycle finished");
        }
    }

    telemetry::shutdown();
    Ok(())
}
