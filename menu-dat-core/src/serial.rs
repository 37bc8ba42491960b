//! Serial-number normalization.
//!
//! Disc serials arrive in many spellings ("T-13011D 50", "t13011d50",
//! "T13011D-50"). Every container lookup goes through [`normalize`], which
//! collapses them onto one fixed-width storage key.

use std::fmt;

use crate::util::read_ascii_fixed;

/// Maximum length of a storage key (the width of a container name field).
pub const KEY_LEN: usize = 10;

/// Strip every non-alphanumeric character, uppercase, and truncate to
/// [`KEY_LEN`] characters.
///
/// Only ASCII letters and digits survive; an empty result means "no key".
///
/// Examples:
/// - `"t-13011d 50!!"` → `"T13011D50"`
/// - `"MK-51000-53"` → `"MK5100053"`
pub fn normalize(serial: &str) -> String {
    serial
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .take(KEY_LEN)
        .collect()
}

/// A normalized serial, usable as a container key.
///
/// Two raw serials that normalize identically produce equal keys, so they
/// address the same container entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SerialKey(String);

impl SerialKey {
    /// Normalize a raw serial into a key.
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    /// Decode a key from a container name field (NUL/space padded ASCII).
    pub fn from_name_field(field: &[u8]) -> Self {
        Self::new(&read_ascii_fixed(field))
    }

    /// Encode this key into a NUL-padded container name field.
    pub fn to_name_field(&self) -> [u8; KEY_LEN] {
        let mut field = [0u8; KEY_LEN];
        let bytes = self.0.as_bytes();
        field[..bytes.len()].copy_from_slice(bytes);
        field
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the raw serial contained no alphanumeric characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SerialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SerialKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SerialKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<&String> for SerialKey {
    fn from(raw: &String) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
#[path = "tests/serial_tests.rs"]
mod tests;
