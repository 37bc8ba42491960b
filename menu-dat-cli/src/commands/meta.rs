use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use menu_dat_core::Role;
use menu_dat_store::metadata::MAX_DESCRIPTION_CHARS;
use menu_dat_store::{Metadata, MetadataRecord};

use crate::cli_types::{MetaFields, SerialArgs};
use crate::data_dir::DataDir;
use crate::error::CliError;

pub(crate) fn run_meta_show(data: &DataDir, args: &SerialArgs) -> Result<(), CliError> {
    let key = data.key(Role::Metadata, args)?;
    let store = data.open::<Metadata>()?;
    let record = store
        .get_record(key.as_str())
        .ok_or_else(|| CliError::not_found(Role::Metadata, key.as_str()))?;

    log::info!("{}", key.if_supports_color(Stdout, |t| t.bold()));
    print_record(&record);
    Ok(())
}

pub(crate) fn run_meta_set(
    data: &DataDir,
    args: &SerialArgs,
    fields: &MetaFields,
) -> Result<(), CliError> {
    let key = data.key(Role::Metadata, args)?;
    let mut store = data.open::<Metadata>()?;
    let existing = store.get_record(key.as_str());
    let created = existing.is_none();

    let record = apply_fields(existing.unwrap_or_default(), fields);
    if record.description.chars().count() > MAX_DESCRIPTION_CHARS {
        log::warn!(
            "Description is longer than {} characters and will be truncated",
            MAX_DESCRIPTION_CHARS
        );
    }

    store.set_record(key.as_str(), &record)?;
    data.save(&mut store)?;

    log::info!(
        "  {} {} metadata for {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        if created { "Created" } else { "Updated" },
        key.if_supports_color(Stdout, |t| t.cyan()),
    );
    print_record(&record);
    Ok(())
}

/// Overlay the fields given on the command line onto `record`.
fn apply_fields(mut record: MetadataRecord, fields: &MetaFields) -> MetadataRecord {
    if let Some(v) = fields.players {
        record.num_players = v;
    }
    if let Some(v) = fields.vmu {
        record.vmu_blocks = v;
    }
    if let Some(v) = fields.accessories {
        record.accessories = v;
    }
    if let Some(v) = fields.network {
        record.network = v;
    }
    if let Some(v) = fields.genre {
        record.genre = v;
    }
    if let Some(v) = &fields.description {
        record.description = v.clone();
    }
    record
}

fn print_record(record: &MetadataRecord) {
    log::info!("  Players:     {}", record.num_players);
    log::info!("  VMU blocks:  {}", record.vmu_blocks);
    log::info!("  Accessories: {:#06x}", record.accessories);
    log::info!("  Network:     {:#04x}", record.network);
    log::info!("  Genre:       {:#06x}", record.genre);
    if record.description.is_empty() {
        log::info!(
            "  Description: {}",
            "(none)".if_supports_color(Stdout, |t| t.dimmed())
        );
    } else {
        log::info!("  Description: {}", record.description);
    }
}
