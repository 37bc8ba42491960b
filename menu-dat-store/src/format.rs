//! On-disk layout shared by BOX.DAT, ICON.DAT and META.DAT.
//!
//! ```text
//! Header (16 bytes):   magic "DAT\x01" | record size:u32 | entry count:u32 | reserved:u32
//! Index (16 bytes per entry):  name:10 ASCII (NUL padded) | reserved:u16 | slot:u32
//! Padding up to record_size * first slot
//! Data: one record_size payload per entry at record_size * slot
//! ```
//!
//! All integers are little-endian.

use menu_dat_core::{KEY_LEN, SerialKey};

use crate::error::FormatError;

pub const MAGIC: &[u8; 4] = b"DAT\x01";
pub const HEADER_SIZE: usize = 16;
pub const INDEX_ENTRY_SIZE: usize = 16;

/// Read a little-endian u32 from a byte slice.
fn read_u32_le(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

/// The fixed file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    pub record_size: u32,
    pub entry_count: u32,
}

impl ContainerHeader {
    /// Parse the header, checking only the magic number.
    pub fn parse(buf: &[u8; HEADER_SIZE]) -> Result<Self, FormatError> {
        if &buf[0..4] != MAGIC {
            return Err(FormatError::BadMagic {
                found: [buf[0], buf[1], buf[2], buf[3]],
            });
        }
        Ok(Self {
            record_size: read_u32_le(buf, 4),
            entry_count: read_u32_le(buf, 8),
        })
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..4].copy_from_slice(MAGIC);
        out[4..8].copy_from_slice(&self.record_size.to_le_bytes());
        out[8..12].copy_from_slice(&self.entry_count.to_le_bytes());
        out
    }

    /// Byte offset just past the index table.
    pub fn index_end(&self) -> u64 {
        index_end(self.entry_count as usize)
    }
}

/// One index-table record.
///
/// An empty key marks a placeholder slot that carries no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRecord {
    pub key: SerialKey,
    pub slot: u32,
}

impl IndexRecord {
    /// Parse a 16-byte index record.
    pub fn parse(buf: &[u8]) -> Self {
        Self {
            key: SerialKey::from_name_field(&buf[0..KEY_LEN]),
            slot: read_u32_le(buf, 12),
        }
    }

    pub fn to_bytes(&self) -> [u8; INDEX_ENTRY_SIZE] {
        let mut out = [0u8; INDEX_ENTRY_SIZE];
        out[0..KEY_LEN].copy_from_slice(&self.key.to_name_field());
        out[12..16].copy_from_slice(&self.slot.to_le_bytes());
        out
    }
}

/// Byte offset just past the index table of a file with `entry_count` entries.
pub fn index_end(entry_count: usize) -> u64 {
    (HEADER_SIZE + entry_count * INDEX_ENTRY_SIZE) as u64
}

/// File offset of the payload stored in `slot`.
pub fn data_offset(record_size: usize, slot: u32) -> u64 {
    record_size as u64 * slot as u64
}

/// First slot whose data offset lies past the header and index table.
///
/// Slot 0 is never used, even when the index would fit in front of it.
pub fn starting_slot(entry_count: usize, record_size: usize) -> u32 {
    let needed = index_end(entry_count).div_ceil(record_size as u64);
    needed.max(1) as u32
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
