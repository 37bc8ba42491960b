use menu_dat_core::SerialKey;
use menu_dat_texture::downscale_256_to_128;

use crate::container::{ArtworkStore, IconStore};
use crate::error::ContainerError;

/// Outcome of rebuilding the icon container from artwork.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegenerateSummary {
    /// Icons written from artwork
    pub regenerated: usize,
    /// Artwork entries whose texture could not be decoded
    pub skipped: Vec<SerialKey>,
    /// Icons removed because their artwork is missing or undecodable
    pub removed: usize,
}

/// Rebuild `icons` so it mirrors `artwork`, one 128x128 icon per cover.
///
/// An icon is kept only when its artwork decodes: icons under skipped or
/// missing artwork keys are deleted.
///
/// `on_entry` is called once per artwork entry, after it is processed.
pub fn regenerate_icons(
    artwork: &ArtworkStore,
    icons: &mut IconStore,
    mut on_entry: impl FnMut(&SerialKey),
) -> Result<RegenerateSummary, ContainerError> {
    let mut summary = RegenerateSummary::default();

    for (key, payload) in artwork.iter() {
        match downscale_256_to_128(payload) {
            Some(icon) => {
                icons.set(key.as_str(), icon)?;
                summary.regenerated += 1;
            }
            None => {
                log::warn!("Artwork for '{}' is not a valid texture, skipping", key);
                summary.skipped.push(key.clone());
                if icons.delete(key.as_str())? {
                    log::debug!("Removed stale icon '{}'", key);
                    summary.removed += 1;
                }
            }
        }
        on_entry(key);
    }

    let orphans: Vec<SerialKey> = icons
        .keys()
        .filter(|k| !artwork.has_entry(k.as_str()))
        .cloned()
        .collect();
    for key in orphans {
        log::debug!("Removing icon '{}' with no artwork", key);
        if icons.delete(key.as_str())? {
            summary.removed += 1;
        }
    }

    Ok(summary)
}
