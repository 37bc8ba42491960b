use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;
use crate::settings::{Settings, settings_path};

/// Show the settings file and the paths it resolves to.
pub(crate) fn run_config_show(settings: &Settings, data_dir: Option<PathBuf>) {
    let path = settings_path();

    log::info!(
        "{}",
        "menu-dat Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let (root, source) = settings.resolve_data_dir(data_dir);
    log::info!(
        "  Data dir:      {} {}",
        root.display(),
        format!("({source})").if_supports_color(Stdout, |t| t.dimmed()),
    );
    if settings.save.backup {
        log::info!("  Backups:       {}", settings.backup_dir(&root).display());
    } else {
        log::info!(
            "  Backups:       {}",
            "disabled".if_supports_color(Stdout, |t| t.yellow())
        );
    }
    log::info!(
        "  Extra serial corrections: {} display, {} artwork",
        settings.translations.display.len(),
        settings.translations.artwork.len(),
    );

    match toml::to_string_pretty(settings) {
        Ok(text) if !text.trim().is_empty() => {
            log::info!("");
            for line in text.lines() {
                log::info!("  {}", line.if_supports_color(Stdout, |t| t.dimmed()));
            }
        }
        Ok(_) => {}
        Err(e) => log::warn!("Could not render settings: {}", e),
    }
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

/// Save (or clear) the remembered data directory.
pub(crate) fn run_config_set_data_dir(
    settings: &Settings,
    path: Option<PathBuf>,
) -> Result<(), CliError> {
    let mut updated = settings.clone();
    updated.paths.data_dir = match path {
        Some(p) => Some(std::path::absolute(&p)?),
        None => None,
    };
    updated
        .save()
        .map_err(|e| CliError::config(format!("Failed to save settings: {}", e)))?;

    match &updated.paths.data_dir {
        Some(p) => log::info!(
            "  {} Data dir set to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            p.display(),
        ),
        None => log::info!(
            "  {} Data dir cleared",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        ),
    }
    Ok(())
}
