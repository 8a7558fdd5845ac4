//! Command-line arguments for the builder driver.

use std::path::PathBuf;

use clap::Parser;

/// Replays selection and undo/redo scripts against an in-memory world.
///
/// CLI values override settings loaded from the config file.
#[derive(Parser, Debug)]
#[command(name = "geist-builder", about = "Geist region selection and edit history driver")]
pub struct Cli {
    /// Edit script (TOML, one `[[step]]` per action).
    pub script: PathBuf,

    /// Path to builder.toml.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Particle kind used for selection outlines.
    #[arg(long)]
    pub marker: Option<u16>,

    /// Start sessions with periodic outlines switched off.
    #[arg(long)]
    pub hide_selection: bool,
}
