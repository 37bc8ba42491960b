use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use menu_dat_core::Role;
use menu_dat_store::{ArtworkStore, IconStore, MetadataStore};

use crate::data_dir::DataDir;
use crate::error::CliError;

pub(crate) fn run_init(data: &DataDir, role: Option<Role>) -> Result<(), CliError> {
    let roles = match role {
        Some(r) => vec![r],
        None => Role::all().to_vec(),
    };

    std::fs::create_dir_all(data.root())?;

    let mut created = 0;
    for role in roles {
        let path = data.path(role);
        if path.exists() {
            log::info!(
                "  {} {} already exists",
                "-".if_supports_color(Stdout, |t| t.dimmed()),
                role.file_name(),
            );
            continue;
        }
        match role {
            Role::Artwork => ArtworkStore::create_empty_file(&path)?,
            Role::Icon => IconStore::create_empty_file(&path)?,
            Role::Metadata => MetadataStore::create_empty_file(&path)?,
        }
        log::info!(
            "  {} Created {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            path.display(),
        );
        created += 1;
    }

    log::info!("");
    log::info!("{} container file(s) created in {}", created, data.root().display());
    Ok(())
}
