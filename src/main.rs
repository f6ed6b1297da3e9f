//! CLI entry point for guidegen

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "guidegen")]
#[command(version)]
#[command(about = "Exports generated pages for an implementation guide", long_about = None)]
struct Cli {
    /// Set the project directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new guide project
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Export generated pages and the guide definition
    #[command(alias = "e")]
    Export {
        /// Output directory (defaults to fsh-generated)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Clean the output folder
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "guidegen=debug,info"
    } else {
        "guidegen=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine project directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            std::fs::create_dir_all(&target_dir)?;
            tracing::info!("Initializing guide project in {:?}", target_dir);
            guidegen::commands::init::init_project(&target_dir)?;
            println!("Initialized guide project in {:?}", target_dir);
        }

        Commands::Export { out } => {
            let mut guide = guidegen::Guide::new(&base_dir)?;
            if let Some(out) = out {
                guide = guide.with_output_dir(out);
            }
            tracing::info!("Exporting guide {}...", guide.config.id);
            let summary = guide.export()?;
            println!("Exported to {:?}", summary.guide_path);
        }

        Commands::Clean => {
            let guide = guidegen::Guide::new(&base_dir)?;
            tracing::info!("Cleaning output folder...");
            guide.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("guidegen version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
