use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use menu_dat_core::Role;
use menu_dat_core::util::format_bytes_approx;
use menu_dat_store::{Artwork, Container, Icon, Metadata, MetadataStore, TextureKind};
use menu_dat_texture::decode;

use crate::commands::truncate_str;
use crate::data_dir::DataDir;
use crate::error::CliError;

pub(crate) fn run_list(data: &DataDir, role: Role) -> Result<(), CliError> {
    let path = data.path(role);
    let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

    let count = match role {
        Role::Artwork => list_textures(&data.open::<Artwork>()?),
        Role::Icon => list_textures(&data.open::<Icon>()?),
        Role::Metadata => list_metadata(&data.open::<Metadata>()?),
    };

    log::info!("");
    log::info!(
        "{}: {} entries ({})",
        path.display().if_supports_color(Stdout, |t| t.bold()),
        count,
        format_bytes_approx(size),
    );
    Ok(())
}

fn list_textures<K: TextureKind>(store: &Container<K>) -> usize {
    for entry in store.entries() {
        let status = match decode(entry.payload()) {
            Some(texture) => format!(
                "{} {}x{}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                texture.width,
                texture.height
            ),
            None => format!(
                "{} not a valid texture",
                "\u{2718}".if_supports_color(Stdout, |t| t.red())
            ),
        };
        log::info!(
            "  {:<10}  slot {:>5}  {}",
            entry.key().if_supports_color(Stdout, |t| t.cyan()),
            entry.slot(),
            status
        );
    }
    store.len()
}

fn list_metadata(store: &MetadataStore) -> usize {
    for key in store.keys() {
        let Some(record) = store.get_record(key.as_str()) else {
            continue;
        };
        log::info!(
            "  {:<10}  {}P  genre {:#06x}  {}",
            key.if_supports_color(Stdout, |t| t.cyan()),
            record.num_players,
            record.genre,
            truncate_str(&record.description, 48).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    store.len()
}
