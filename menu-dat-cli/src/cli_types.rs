//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use menu_dat_core::Role;

#[derive(Parser)]
#[command(name = "menu-dat")]
#[command(about = "Manage openMenu artwork, icon and metadata containers", long_about = None)]
pub(crate) struct Cli {
    /// Directory holding BOX.DAT, ICON.DAT and META.DAT (defaults to settings, then current directory)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// A disc serial plus the header fields used to correct it.
#[derive(Args, Clone)]
pub(crate) struct SerialArgs {
    /// Disc serial (product number), in any spelling
    pub serial: String,

    /// Release date from the disc header (YYYYMMDD)
    #[arg(long, default_value = "")]
    pub date: String,

    /// Game name from the disc header
    #[arg(long, default_value = "")]
    pub name: String,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show how a serial is normalized and translated
    Serial {
        #[command(flatten)]
        serial: SerialArgs,
    },

    /// Create empty container files that do not exist yet
    Init {
        /// Only create this container (artwork, icon, metadata)
        #[arg(short, long)]
        role: Option<Role>,
    },

    /// List the entries of a container
    List {
        /// Container to list (artwork, icon, metadata)
        #[arg(short, long, default_value = "artwork")]
        role: Role,
    },

    /// Encode an image as cover art (and its menu icon)
    Import {
        #[command(flatten)]
        serial: SerialArgs,

        /// Image file (PNG, JPEG, ...)
        image: PathBuf,

        /// Don't write the 128x128 icon
        #[arg(long)]
        no_icon: bool,
    },

    /// Decode stored cover art or an icon to an image file
    Export {
        #[command(flatten)]
        serial: SerialArgs,

        /// Output file (format chosen from the extension, usually .png)
        output: PathBuf,

        /// Container to read from (artwork or icon)
        #[arg(short, long, default_value = "artwork")]
        role: Role,
    },

    /// Remove a serial's entry from one or all containers
    Delete {
        #[command(flatten)]
        serial: SerialArgs,

        /// Only delete from this container (default: all)
        #[arg(short, long)]
        role: Option<Role>,
    },

    /// Rebuild ICON.DAT from the cover art in BOX.DAT
    SyncIcons,

    /// View or edit metadata records
    Meta {
        #[command(subcommand)]
        action: MetaAction,
    },

    /// Copy entries from another container file into ours
    Merge {
        /// Container file to merge from
        other: PathBuf,

        /// Role of both containers (artwork, icon, metadata)
        #[arg(short, long, default_value = "metadata")]
        role: Role,

        /// Replace entries that already exist
        #[arg(long)]
        overwrite: bool,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum MetaAction {
    /// Print the metadata record for a serial
    Show {
        #[command(flatten)]
        serial: SerialArgs,
    },

    /// Create or update a metadata record (unset fields keep their value)
    Set {
        #[command(flatten)]
        serial: SerialArgs,

        #[command(flatten)]
        fields: MetaFields,
    },
}

#[derive(Args, Clone, Default)]
pub(crate) struct MetaFields {
    /// Number of players
    #[arg(long)]
    pub players: Option<u8>,

    /// VMU blocks used by saves
    #[arg(long)]
    pub vmu: Option<u8>,

    /// Accessory flags
    #[arg(long)]
    pub accessories: Option<u16>,

    /// Network flags
    #[arg(long)]
    pub network: Option<u8>,

    /// Genre flags
    #[arg(long)]
    pub genre: Option<u16>,

    /// Free-text description (at most 375 ASCII characters)
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the resolved paths
    Show,

    /// Print the settings file path
    Path,

    /// Remember a data directory (omit the path to clear it)
    SetDataDir {
        /// Directory holding the container files
        path: Option<PathBuf>,
    },
}
