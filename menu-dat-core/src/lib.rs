//! Serial normalization and translation for boot-menu artwork containers.
//!
//! Everything here is pure: mapping a raw disc serial onto the key used by
//! the artwork, icon and metadata containers, plus the container roles and
//! small ASCII helpers shared by the other crates.

pub mod role;
pub mod serial;
pub mod translate;
pub mod util;

pub use role::{Role, RoleParseError, TEXTURE_HEADER_SIZE};
pub use serial::{KEY_LEN, SerialKey, normalize};
pub use translate::{
    DisplayCorrection, ExtraTranslations, SerialTranslator, translate_artwork, translate_display,
};
