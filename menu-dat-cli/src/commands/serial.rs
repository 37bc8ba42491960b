use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use menu_dat_core::{SerialTranslator, normalize};

use crate::cli_types::SerialArgs;

pub(crate) fn run_serial(args: &SerialArgs, translator: &SerialTranslator) {
    let normalized = normalize(&args.serial);
    let display = translator.translate_display(&args.serial, &args.date, &args.name);
    let artwork = translator.translate_artwork(&display);

    log::info!(
        "{}",
        args.serial.if_supports_color(Stdout, |t| t.bold())
    );
    if normalized.is_empty() {
        log::info!(
            "  Normalized:   {}",
            "(empty, cannot be stored)".if_supports_color(Stdout, |t| t.red())
        );
        return;
    }
    log::info!("  Normalized:   {}", normalized);
    log::info!(
        "  Display:      {}{}",
        display,
        changed_marker(&display, &args.serial)
    );
    log::info!(
        "  Artwork:      {}{}",
        artwork,
        changed_marker(&artwork, &display)
    );
    log::info!(
        "  Metadata key: {}",
        translator
            .display_key(&args.serial, &args.date, &args.name)
            .if_supports_color(Stdout, |t| t.cyan())
    );
    log::info!(
        "  Artwork key:  {}",
        translator
            .artwork_key(&args.serial, &args.date, &args.name)
            .if_supports_color(Stdout, |t| t.cyan())
    );
}

fn changed_marker(after: &str, before: &str) -> String {
    if after == before {
        String::new()
    } else {
        format!(
            " {}",
            "(translated)".if_supports_color(Stdout, |t| t.yellow())
        )
    }
}
