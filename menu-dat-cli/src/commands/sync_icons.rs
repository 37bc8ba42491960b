use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use menu_dat_store::{Artwork, Icon, regenerate_icons};

use crate::data_dir::DataDir;
use crate::error::CliError;

pub(crate) fn run_sync_icons(data: &DataDir, quiet: bool) -> Result<(), CliError> {
    let art = data.open::<Artwork>()?;
    let mut icons = data.open::<Icon>()?;

    if art.is_empty() {
        log::warn!("No artwork in {}", data.path(art.role()).display());
    }

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(art.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("  {bar:40.cyan/blue} {pos}/{len} {msg}")
                .expect("static pattern")
                .progress_chars("=> "),
        );
        pb
    };

    let summary = regenerate_icons(&art, &mut icons, |key| {
        pb.set_message(key.to_string());
        pb.inc(1);
    })?;
    pb.finish_and_clear();

    data.save(&mut icons)?;

    log::info!(
        "  {} {} icon(s) regenerated",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.regenerated,
    );
    if summary.removed > 0 {
        log::info!(
            "  {} {} icon(s) without usable artwork removed",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            summary.removed,
        );
    }
    for key in &summary.skipped {
        log::info!(
            "  {} {} skipped: artwork is not a valid 256x256 texture",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            key,
        );
    }
    Ok(())
}
