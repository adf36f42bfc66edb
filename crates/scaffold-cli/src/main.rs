//! scaffold CLI: create project folder layouts.
//!
//! Running `scaffold` with no command builds the default `backend` preset in the
//! current directory. The `create`, `presets`, and `show` commands select other
//! presets or JSON layout files, list what is built in, and print layouts.

mod commands;
mod output;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "scaffold",
    about = "Create project folder layouts from presets or JSON layout files",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the layout's directories and empty files (the default command)
    Create {
        #[command(flatten)]
        source: LayoutSource,

        /// Directory to create the layout in
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Print the paths that would be created without touching the disk
        #[arg(long)]
        dry_run: bool,
    },

    /// List the built-in presets
    Presets,

    /// Print a layout as JSON
    Show {
        #[command(flatten)]
        source: LayoutSource,
    },
}

/// Which layout to use. Defaults to the `backend` preset.
#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct LayoutSource {
    /// Built-in preset name (see `scaffold presets`)
    #[arg(long)]
    pub preset: Option<String>,

    /// JSON layout file
    #[arg(long)]
    pub layout: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        None => {
            commands::create::run(Path::new("."), &LayoutSource::default(), false)?;
        }
        Some(Commands::Create {
            source,
            root,
            dry_run,
        }) => {
            commands::create::run(&root, &source, dry_run)?;
        }
        Some(Commands::Presets) => {
            commands::presets::run();
        }
        Some(Commands::Show { source }) => {
            commands::show::run(&source)?;
        }
    }

    Ok(())
}
