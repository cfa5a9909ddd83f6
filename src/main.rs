use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};

use promo_reel::{composition::ReelEngine, config::Config, scenes::SceneRegistry};

#[derive(Parser)]
#[command(
    name = "promo-reel",
    version,
    about = "Frame-by-frame style trees for the AI Research Skills promo",
    long_about = "Promo-Reel evaluates the promotional video timeline one frame at a time and writes the resulting style trees for a host renderer."
)]
struct Cli {
    /// Configuration file (optional)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the style tree of a single frame as JSON
    Frame {
        /// Absolute frame index
        #[arg(allow_negative_numbers = true)]
        frame: i64,
    },

    /// Render a range of frames to a directory
    Render {
        /// Output directory for frame JSON and the manifest
        #[arg(short, long)]
        output: PathBuf,

        /// First frame to render (default: 0)
        #[arg(long, allow_negative_numbers = true)]
        from: Option<i64>,

        /// Frame to stop before (default: end of the reel)
        #[arg(long, allow_negative_numbers = true)]
        to: Option<i64>,
    },

    /// List the scenes on the timeline
    Scenes,

    /// Write the default configuration to a file
    InitConfig {
        /// Destination path
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so frame JSON on stdout stays clean
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Promo-Reel v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::InitConfig { path } => {
            Config::default().save_to_file(&path)?;
            info!("Default configuration written to {:?}", path);
        }
        Command::Frame { frame } => {
            let engine = build_engine(cli.config.as_deref())?;
            let description = engine.render_frame(frame);
            let json = engine.encode_frame(&description)?;
            println!("{}", String::from_utf8_lossy(&json));
        }
        Command::Render { output, from, to } => {
            let engine = build_engine(cli.config.as_deref())?;
            let full = engine.full_range();
            let range = from.unwrap_or(full.start)..to.unwrap_or(full.end);

            let summary = engine.export(range, &output).await?;
            info!(
                "Render complete! {} frames saved to: {:?}",
                summary.frame_count, summary.output_dir
            );
        }
        Command::Scenes => {
            let engine = build_engine(cli.config.as_deref())?;
            for sequence in engine.sequences() {
                println!(
                    "{:<12} frames {:>4}..{:<4} settles at +{:<4.0} {}",
                    sequence.scene,
                    sequence.from,
                    sequence.end,
                    sequence.settle_frame,
                    sequence.description
                );
            }
        }
    }

    Ok(())
}

/// Load the configuration (or defaults) and resolve the timeline
fn build_engine(config_path: Option<&Path>) -> Result<ReelEngine> {
    let config = match config_path {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(config_path).map_err(|e| anyhow::anyhow!(e.user_message()))?
        }
        None => {
            info!("Using default configuration");
            Config::default()
        }
    };

    let registry = SceneRegistry::new();
    info!("Registered scenes: {}", registry.available_scenes().join(", "));

    ReelEngine::new(config, &registry).map_err(|e| anyhow::anyhow!(e.user_message()))
}
