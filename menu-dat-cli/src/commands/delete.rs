use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use menu_dat_core::{Role, SerialKey};
use menu_dat_store::{Artwork, Icon, Metadata, RecordKind};

use crate::cli_types::SerialArgs;
use crate::data_dir::DataDir;
use crate::error::CliError;

pub(crate) fn run_delete(
    data: &DataDir,
    args: &SerialArgs,
    role: Option<Role>,
) -> Result<(), CliError> {
    let roles = match role {
        Some(r) => vec![r],
        None => Role::all().to_vec(),
    };

    let mut removed_any = false;
    for role in roles {
        let key = data.key(role, args)?;
        let removed = match role {
            Role::Artwork => delete_from::<Artwork>(data, &key)?,
            Role::Icon => delete_from::<Icon>(data, &key)?,
            Role::Metadata => delete_from::<Metadata>(data, &key)?,
        };
        if removed {
            removed_any = true;
            log::info!(
                "  {} Removed {} from {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                key.if_supports_color(Stdout, |t| t.cyan()),
                role.file_name(),
            );
        } else {
            log::info!(
                "  {} {} not in {}",
                "-".if_supports_color(Stdout, |t| t.dimmed()),
                key,
                role.file_name(),
            );
        }
    }

    if !removed_any {
        log::warn!("Nothing deleted for '{}'", args.serial);
    }
    Ok(())
}

fn delete_from<K: RecordKind>(data: &DataDir, key: &SerialKey) -> Result<bool, CliError> {
    if !data.path(K::ROLE).exists() {
        return Ok(false);
    }
    let mut store = data.open::<K>()?;
    let removed = store.delete(key.as_str())?;
    data.save(&mut store)?;
    Ok(removed)
}
