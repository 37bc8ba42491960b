//! menu-dat CLI
//!
//! Command-line interface for the openMenu artwork, icon and metadata
//! containers (BOX.DAT, ICON.DAT, META.DAT).

mod cli_types;
mod commands;
mod data_dir;
mod error;
mod settings;

use std::io::Write;

use clap::Parser;
use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use menu_dat_core::SerialTranslator;

use cli_types::{Cli, Commands, ConfigAction, MetaAction};
use data_dir::DataDir;
use error::CliError;
use settings::Settings;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e
        );
        std::process::exit(1);
    }
}

/// Install the global logger.
///
/// Normal output goes through `log::info!` to stdout without decoration.
/// `--verbose` adds timestamps and debug messages; `--quiet` keeps only
/// warnings and errors. `RUST_LOG` overrides both.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout);
    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(
                buf,
                "{}: {}",
                level.as_str().to_lowercase(),
                record.args()
            ),
        });
    }
    builder.parse_default_env();
    builder.init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = Settings::load();

    // Commands that never touch the data directory
    match &cli.command {
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => commands::config::run_config_show(&settings, cli.data_dir),
                ConfigAction::Path => commands::config::run_config_path(),
                ConfigAction::SetDataDir { path } => {
                    commands::config::run_config_set_data_dir(&settings, path.clone())?
                }
            }
            return Ok(());
        }
        Commands::Serial { serial } => {
            let translator = SerialTranslator::with_extra(settings.translations.clone());
            commands::serial::run_serial(serial, &translator);
            return Ok(());
        }
        _ => {}
    }

    let (root, source) = settings.resolve_data_dir(cli.data_dir);
    log::debug!("Data dir {} (from {})", root.display(), source);
    let data = DataDir::new(root, settings);

    match cli.command {
        Commands::Init { role } => commands::init::run_init(&data, role),
        Commands::List { role } => commands::list::run_list(&data, role),
        Commands::Import {
            serial,
            image,
            no_icon,
        } => commands::import::run_import(&data, &serial, &image, no_icon),
        Commands::Export {
            serial,
            output,
            role,
        } => commands::export::run_export(&data, &serial, &output, role),
        Commands::Delete { serial, role } => commands::delete::run_delete(&data, &serial, role),
        Commands::SyncIcons => commands::sync_icons::run_sync_icons(&data, cli.quiet),
        Commands::Meta { action } => match action {
            MetaAction::Show { serial } => commands::meta::run_meta_show(&data, &serial),
            MetaAction::Set { serial, fields } => {
                commands::meta::run_meta_set(&data, &serial, &fields)
            }
        },
        Commands::Merge {
            other,
            role,
            overwrite,
        } => commands::merge::run_merge(&data, &other, role, overwrite),
        Commands::Config { .. } | Commands::Serial { .. } => Ok(()),
    }
}
