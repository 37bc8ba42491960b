use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use menu_dat_core::Role;
use menu_dat_store::{Artwork, Container, Icon, Metadata, RecordKind};

use crate::data_dir::DataDir;
use crate::error::CliError;

pub(crate) fn run_merge(
    data: &DataDir,
    other: &Path,
    role: Role,
    overwrite: bool,
) -> Result<(), CliError> {
    let (merged, total) = match role {
        Role::Artwork => merge_into::<Artwork>(data, other, overwrite)?,
        Role::Icon => merge_into::<Icon>(data, other, overwrite)?,
        Role::Metadata => merge_into::<Metadata>(data, other, overwrite)?,
    };

    log::info!(
        "  {} Merged {} of {} {} entries from {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        merged,
        total,
        role,
        other.display(),
    );
    if merged < total && !overwrite {
        log::info!(
            "  {} {} already present (use --overwrite to replace)",
            "-".if_supports_color(Stdout, |t| t.dimmed()),
            total - merged,
        );
    }
    Ok(())
}

fn merge_into<K: RecordKind>(
    data: &DataDir,
    other: &Path,
    overwrite: bool,
) -> Result<(usize, usize), CliError> {
    let source = Container::<K>::open(other)?;
    let mut ours = data.open::<K>()?;
    let merged = ours.merge_from(&source, overwrite)?;
    data.save(&mut ours)?;
    Ok((merged, source.len()))
}
