//! Serial translation tables.
//!
//! Some discs carry a product number that is simply wrong, and several
//! regional releases share one set of artwork. Two closed tables handle this:
//!
//! 1. **Display corrections** map a known-bad `(product, release date)` or
//!    `(product, title substring)` pair onto the correct serial. The result
//!    is what the menu shows and what the firmware INI uses.
//! 2. **Artwork remaps** map a regional variant onto the serial that owns
//!    the shared artwork. Only artwork/icon lookups apply this step.
//!
//! Products are compared on their normalized form, so `"T-13001D-05"` and
//! `"T13001D05"` hit the same rule. Anything not in a table passes through
//! unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::serial::{SerialKey, normalize};

/// `(bad product, release date, corrected product)`.
///
/// Dates are compared exactly as stored in the disc header (`YYYYMMDD`).
const DISPLAY_CORRECTIONS: &[(&str, &str, &str)] = &[("T15117N", "20010423", "T15112D05")];

/// `(bad product, title substring, corrected product)`.
///
/// The substring is matched case-insensitively against the disc title.
/// No verified entries ship yet; name rules come from configuration.
const DISPLAY_NAME_CORRECTIONS: &[(&str, &str, &str)] = &[];

/// `(regional variant, artwork owner)`.
const ARTWORK_REMAPS: &[(&str, &str)] = &[("T13001D05", "T13001D")];

/// A display correction supplied by configuration.
///
/// Exactly one of `date` / `name_contains` should be set; a rule with
/// neither never matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayCorrection {
    pub product: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
    pub corrected: String,
}

impl DisplayCorrection {
    fn matches(&self, product: &str, release_date: &str, name: &str) -> bool {
        if normalize(&self.product) != product {
            return false;
        }
        match (&self.date, &self.name_contains) {
            (Some(date), _) => date.trim() == release_date,
            (None, Some(needle)) => contains_ignore_case(name, needle),
            (None, None) => false,
        }
    }
}

/// Extra translation rules loaded from the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraTranslations {
    #[serde(default)]
    pub display: Vec<DisplayCorrection>,
    /// Regional variant → artwork owner.
    #[serde(default)]
    pub artwork: BTreeMap<String, String>,
}

impl ExtraTranslations {
    pub fn is_empty(&self) -> bool {
        self.display.is_empty() && self.artwork.is_empty()
    }
}

/// Correct a known-bad product number for display and firmware INI use.
///
/// Uses only the built-in tables; see [`SerialTranslator`] for configured
/// extras. Date rules are checked before title rules.
pub fn translate_display(raw_product: &str, release_date: &str, name: &str) -> String {
    builtin_display(&normalize(raw_product), release_date.trim(), name)
        .map(str::to_string)
        .unwrap_or_else(|| raw_product.to_string())
}

/// Remap a regional variant onto the serial that owns its artwork.
pub fn translate_artwork(display_serial: &str) -> String {
    builtin_artwork(&normalize(display_serial))
        .map(str::to_string)
        .unwrap_or_else(|| display_serial.to_string())
}

fn builtin_display(product: &str, release_date: &str, name: &str) -> Option<&'static str> {
    DISPLAY_CORRECTIONS
        .iter()
        .find(|(bad, date, _)| *bad == product && *date == release_date)
        .or_else(|| {
            DISPLAY_NAME_CORRECTIONS
                .iter()
                .find(|(bad, needle, _)| *bad == product && contains_ignore_case(name, needle))
        })
        .map(|&(_, _, corrected)| corrected)
}

fn builtin_artwork(serial: &str) -> Option<&'static str> {
    ARTWORK_REMAPS
        .iter()
        .find(|(variant, _)| *variant == serial)
        .map(|&(_, owner)| owner)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Built-in translation tables combined with configured extras.
///
/// Built-in rules are checked first, so configuration can add corrections
/// but never override a shipped one.
#[derive(Debug, Clone, Default)]
pub struct SerialTranslator {
    extra: ExtraTranslations,
    /// Normalized variant → owner, built once from `extra.artwork`.
    extra_artwork: BTreeMap<String, String>,
}

impl SerialTranslator {
    /// A translator using only the built-in tables.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extra(extra: ExtraTranslations) -> Self {
        let extra_artwork = extra
            .artwork
            .iter()
            .map(|(variant, owner)| (normalize(variant), owner.clone()))
            .filter(|(variant, _)| !variant.is_empty())
            .collect();
        Self {
            extra,
            extra_artwork,
        }
    }

    pub fn extra(&self) -> &ExtraTranslations {
        &self.extra
    }

    /// Display correction: built-in table, then configured rules.
    pub fn translate_display(&self, raw_product: &str, release_date: &str, name: &str) -> String {
        let product = normalize(raw_product);
        let date = release_date.trim();
        if let Some(corrected) = builtin_display(&product, date, name) {
            return corrected.to_string();
        }
        self.extra
            .display
            .iter()
            .find(|rule| rule.matches(&product, date, name))
            .map(|rule| rule.corrected.clone())
            .unwrap_or_else(|| raw_product.to_string())
    }

    /// Artwork remap: built-in table, then configured remaps.
    pub fn translate_artwork(&self, display_serial: &str) -> String {
        let serial = normalize(display_serial);
        if let Some(owner) = builtin_artwork(&serial) {
            return owner.to_string();
        }
        self.extra_artwork
            .get(&serial)
            .cloned()
            .unwrap_or_else(|| display_serial.to_string())
    }

    /// Key used for the metadata container: display correction, then normalize.
    pub fn display_key(&self, raw_product: &str, release_date: &str, name: &str) -> SerialKey {
        SerialKey::new(&self.translate_display(raw_product, release_date, name))
    }

    /// Key used for the artwork and icon containers: display correction,
    /// artwork remap, then normalize.
    pub fn artwork_key(&self, raw_product: &str, release_date: &str, name: &str) -> SerialKey {
        let display = self.translate_display(raw_product, release_date, name);
        SerialKey::new(&self.translate_artwork(&display))
    }
}

#[cfg(test)]
#[path = "tests/translate_tests.rs"]
mod tests;
