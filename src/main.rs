//! `mdgrid` CLI - find markdown tables in chat messages and draw them as grids

mod cmd;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mdgrid::{Config, GridStyle, OutputFormat, Role};

#[derive(Parser)]
#[command(name = "mdgrid")]
#[command(about = "Find markdown pipe tables in chat messages and render them as grids")]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.config/mdgrid/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether the input contains a markdown table
    Detect {
        /// Input file (stdin if omitted or `-`)
        file: Option<PathBuf>,
    },

    /// Extract the first markdown table from the input
    Extract {
        /// Input file (stdin if omitted or `-`)
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        #[command(flatten)]
        grid: GridArgs,
    },

    /// Render a chat message with its table drawn as a grid
    Render {
        /// Input file (stdin if omitted or `-`)
        file: Option<PathBuf>,

        /// Author of the message; tables in user messages stay as text
        #[arg(short, long, value_enum, default_value_t = Role::Assistant)]
        role: Role,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        #[command(flatten)]
        grid: GridArgs,
    },

    /// Render a JSON chat transcript
    Transcript {
        /// Transcript file (JSON array of messages)
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        #[command(flatten)]
        grid: GridArgs,
    },
}

/// Grid options shared by the rendering commands.
#[derive(clap::Args)]
struct GridArgs {
    /// Maximum grid width in columns
    #[arg(short, long)]
    width: Option<u16>,

    /// Grid border style
    #[arg(short, long, value_enum)]
    style: Option<GridStyle>,

    /// Also draw tables in user-authored messages
    #[arg(long)]
    user_tables: bool,
}

impl GridArgs {
    /// Apply command-line overrides on top of the config file.
    fn merge(self, mut config: Config) -> Config {
        config.width = self.width.or(config.width);
        config.style = self.style.unwrap_or(config.style);
        config.user_tables |= self.user_tables;
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Detect { file } => {
            cmd::detect::cmd_detect(file.as_deref())?;
        }
        Commands::Extract { file, format, grid } => {
            let config = grid.merge(config);
            cmd::extract::cmd_extract(file.as_deref(), format.unwrap_or(config.format), &config)?;
        }
        Commands::Render {
            file,
            role,
            format,
            grid,
        } => {
            let config = grid.merge(config);
            cmd::render::cmd_render(
                file.as_deref(),
                role,
                format.unwrap_or(config.format),
                &config,
            )?;
        }
        Commands::Transcript { file, format, grid } => {
            let config = grid.merge(config);
            cmd::render::cmd_transcript(&file, format.unwrap_or(config.format), &config)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            Config::load_from(path).with_context(|| format!("failed to load {}", path.display()))
        }
        None => Config::load().context("failed to load config"),
    }
}
