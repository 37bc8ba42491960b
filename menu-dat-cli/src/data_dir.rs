//! The directory holding the three container files, plus the save policy
//! that applies to it.

use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use menu_dat_core::{Role, SerialKey, SerialTranslator};
use menu_dat_store::{Container, RecordKind};

use crate::cli_types::SerialArgs;
use crate::error::CliError;
use crate::settings::Settings;

pub(crate) struct DataDir {
    root: PathBuf,
    settings: Settings,
    translator: SerialTranslator,
}

impl DataDir {
    pub(crate) fn new(root: PathBuf, settings: Settings) -> Self {
        let translator = SerialTranslator::with_extra(settings.translations.clone());
        Self {
            root,
            settings,
            translator,
        }
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn path(&self, role: Role) -> PathBuf {
        self.root.join(role.file_name())
    }

    /// Storage key for `args` in a container of `role`.
    ///
    /// Artwork and icons use the artwork-remapped serial; metadata uses the
    /// display serial.
    pub(crate) fn key(&self, role: Role, args: &SerialArgs) -> Result<SerialKey, CliError> {
        let key = match role {
            Role::Artwork | Role::Icon => {
                self.translator
                    .artwork_key(&args.serial, &args.date, &args.name)
            }
            Role::Metadata => self
                .translator
                .display_key(&args.serial, &args.date, &args.name),
        };
        if key.is_empty() {
            return Err(menu_dat_store::ContainerError::EmptyKey.into());
        }
        Ok(key)
    }

    /// Load the container for `K`, or start an empty one if the file does
    /// not exist yet.
    pub(crate) fn open<K: RecordKind>(&self) -> Result<Container<K>, CliError> {
        let path = self.path(K::ROLE);
        if !path.exists() {
            log::debug!("{} not found, starting empty", path.display());
            return Ok(Container::new());
        }
        Ok(Container::open(&path)?)
    }

    /// Write `container` back to its file if it has unsaved changes,
    /// backing up the previous file first unless backups are disabled.
    pub(crate) fn save<K: RecordKind>(&self, container: &mut Container<K>) -> Result<(), CliError> {
        if !container.is_dirty() {
            log::debug!("{} unchanged, not saving", K::ROLE.file_name());
            return Ok(());
        }

        std::fs::create_dir_all(&self.root)?;
        let path = self.path(K::ROLE);

        if self.settings.save.backup {
            let backup_dir = self.settings.backup_dir(&self.root);
            let backup = container.backup_and_save(
                &path,
                &backup_dir,
                self.settings.save.proceed_without_backup,
            )?;
            if let Some(backup) = backup {
                log::info!(
                    "  Backed up {} to {}",
                    K::ROLE.file_name(),
                    backup.display().if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
        } else {
            container.save(&path)?;
        }

        log::debug!("Wrote {} entries to {}", container.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/data_dir_tests.rs"]
mod tests;
