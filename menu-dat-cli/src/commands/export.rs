use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use menu_dat_core::Role;
use menu_dat_store::{Artwork, Icon};
use menu_dat_texture::save_image;

use crate::cli_types::SerialArgs;
use crate::data_dir::DataDir;
use crate::error::CliError;

pub(crate) fn run_export(
    data: &DataDir,
    args: &SerialArgs,
    output: &Path,
    role: Role,
) -> Result<(), CliError> {
    let key = data.key(role, args)?;

    let payload = match role {
        Role::Artwork => data.open::<Artwork>()?.get(key.as_str()).map(<[u8]>::to_vec),
        Role::Icon => data.open::<Icon>()?.get(key.as_str()).map(<[u8]>::to_vec),
        Role::Metadata => {
            return Err(CliError::other(
                "metadata records hold no image; use `meta show` instead",
            ));
        }
    };
    let payload = payload.ok_or_else(|| CliError::not_found(role, key.as_str()))?;

    save_image(&payload, output)?;
    log::info!(
        "  {} Exported {} {} to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        key.if_supports_color(Stdout, |t| t.cyan()),
        role,
        output.display(),
    );
    Ok(())
}
