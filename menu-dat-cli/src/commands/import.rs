use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use menu_dat_core::Role;
use menu_dat_store::{Artwork, Icon, TextureKind};
use menu_dat_texture::encode_image_file;

use crate::cli_types::SerialArgs;
use crate::data_dir::DataDir;
use crate::error::CliError;

pub(crate) fn run_import(
    data: &DataDir,
    args: &SerialArgs,
    image: &Path,
    no_icon: bool,
) -> Result<(), CliError> {
    let key = data.key(Role::Artwork, args)?;

    let mut art = data.open::<Artwork>()?;
    let replaced = art.has_entry(key.as_str());
    art.set(key.as_str(), encode_image_file(image, Artwork::TEXTURE_SIZE)?)?;
    data.save(&mut art)?;
    log::info!(
        "  {} {} artwork for {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        if replaced { "Replaced" } else { "Added" },
        key.if_supports_color(Stdout, |t| t.cyan()),
    );

    if no_icon {
        return Ok(());
    }

    let mut icons = data.open::<Icon>()?;
    icons.set(key.as_str(), encode_image_file(image, Icon::TEXTURE_SIZE)?)?;
    data.save(&mut icons)?;
    log::info!(
        "  {} Wrote icon for {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        key.if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
