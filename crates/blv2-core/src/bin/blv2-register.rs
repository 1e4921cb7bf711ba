//! Shortcut and file-association maintenance tool for the launcher.
//!
//! Thin driver over the `blv2-core` library for install/uninstall flows:
//!
//!   blv2-register install            - register the .blend handler
//!   blv2-register uninstall          - remove the handler records
//!   blv2-register status             - report registration state
//!   blv2-register shortcut           - create the launcher's own shortcut

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use blv2_core::{association_manager, LauncherEnv};

#[derive(Parser, Debug)]
#[command(name = "blv2-register")]
#[command(about = "Shortcut and file-association maintenance for the Blender build launcher")]
struct Args {
    /// Root folder holding installed Blender builds
    #[arg(long, default_value = ".")]
    library: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register the launcher as a .blend/.blend1 handler
    Install,
    /// Remove the file-association records (safe if nothing is registered)
    Uninstall,
    /// Report whether the handler is registered
    Status,
    /// Create a shortcut that launches this program
    Shortcut {
        /// Where to place the shortcut (defaults to the platform location)
        #[arg(long)]
        destination: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let env = LauncherEnv::current(args.library.clone())?;
    let manager = association_manager(env)?;

    match args.command {
        Command::Install => {
            manager.register_file_associations()?;
        }
        Command::Uninstall => {
            manager.unregister_file_associations()?;
        }
        Command::Status => {
            // Intentional stdout so scripts can parse the answer
            println!("registered={}", manager.file_associations_registered()?);
        }
        Command::Shortcut { destination } => {
            let destination = match destination {
                Some(path) => path,
                None => manager.default_shortcut_destination()?,
            };
            manager.create_launcher_shortcut(&destination)?;
            info!(
                "{} created at {}",
                manager.shortcut_type(),
                destination.display()
            );
        }
    }

    Ok(())
}
