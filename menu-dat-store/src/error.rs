use std::path::PathBuf;

use menu_dat_core::Role;
use menu_dat_texture::TextureError;

/// Structural problems found while loading a container file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("file is {actual} bytes, shorter than the 16-byte header")]
    TruncatedHeader { actual: u64 },

    #[error("bad magic {found:02X?}, expected \"DAT\\x01\"")]
    BadMagic { found: [u8; 4] },

    #[error("record size {found} does not match expected {expected}")]
    RecordSize { expected: u32, found: u32 },

    #[error("file is {actual} bytes, too short for {entries} index entries ({needed} bytes)")]
    TruncatedIndex { entries: u32, needed: u64, actual: u64 },

    #[error("entry '{key}' in slot {slot} ends at byte {end}, past the end of the file ({len} bytes)")]
    OutOfBounds {
        key: String,
        slot: u32,
        end: u64,
        len: u64,
    },

    #[error("entry '{key}' in slot {slot} overlaps the header and index table")]
    OverlapsIndex { key: String, slot: u32 },
}

/// Errors that can occur during container operations.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid container: {0}")]
    Format(#[from] FormatError),

    #[error("Serial normalizes to an empty key")]
    EmptyKey,

    #[error("Payload is {actual} bytes, expected {expected}")]
    PayloadSize { expected: usize, actual: usize },

    #[error("Cannot store a {actual} payload in the {expected} container")]
    PayloadRole { expected: Role, actual: Role },

    #[error("Container is not loaded")]
    NotLoaded,

    #[error("Backup of {} failed: {source}", path.display())]
    BackupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),
}
