//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ctr-playtime")]
#[command(about = "Catalog 3DS cartridge images and track playtime", long_about = None)]
pub(crate) struct Cli {
    /// Directory containing cartridge images (overrides the settings file)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Playtime ledger file (overrides the settings file)
    #[arg(long, global = true)]
    pub ledger: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List every game found under the library root
    Scan,

    /// Show recorded playtime, creating the ledger on first use
    Times,

    /// Launch a game in the emulator and record the session
    Play {
        /// Program ID of the game (see `scan`)
        program_id: String,

        /// Emulator executable or its directory (overrides the settings file)
        #[arg(short, long)]
        emulator: Option<PathBuf>,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the resolved settings
    Show,

    /// Store library, emulator, or ledger locations
    Set {
        /// Directory containing cartridge images
        #[arg(long)]
        roms: Option<PathBuf>,

        /// Emulator executable or its directory
        #[arg(long)]
        emulator: Option<PathBuf>,

        /// Playtime ledger file
        #[arg(long)]
        ledger: Option<PathBuf>,
    },

    /// Print the settings file path
    Path,
}
