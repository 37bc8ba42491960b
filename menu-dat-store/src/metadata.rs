//! META.DAT record layout.
//!
//! ```text
//! 0x00  u8      player count
//! 0x01  u8      VMU blocks
//! 0x02  u16     accessory flags
//! 0x04  u8      network flags
//! 0x05  u8      reserved (0)
//! 0x06  u16     genre flags
//! 0x08  [u8;376] description, NUL-terminated ASCII
//! ```

use menu_dat_core::util::{read_ascii, write_ascii_terminated};

use crate::error::ContainerError;

pub const METADATA_RECORD_SIZE: usize = 384;
pub const DESCRIPTION_OFFSET: usize = 0x08;
pub const DESCRIPTION_LEN: usize = METADATA_RECORD_SIZE - DESCRIPTION_OFFSET;
/// Longest description that still leaves room for the terminator.
pub const MAX_DESCRIPTION_CHARS: usize = DESCRIPTION_LEN - 1;

/// Structured content of one metadata record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    pub num_players: u8,
    pub vmu_blocks: u8,
    pub accessories: u16,
    pub network: u8,
    pub genre: u16,
    pub description: String,
}

impl MetadataRecord {
    /// Parse a 384-byte record. Non-printable description bytes are dropped.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, ContainerError> {
        if buf.len() != METADATA_RECORD_SIZE {
            return Err(ContainerError::PayloadSize {
                expected: METADATA_RECORD_SIZE,
                actual: buf.len(),
            });
        }
        Ok(Self {
            num_players: buf[0x00],
            vmu_blocks: buf[0x01],
            accessories: u16::from_le_bytes([buf[0x02], buf[0x03]]),
            network: buf[0x04],
            genre: u16::from_le_bytes([buf[0x06], buf[0x07]]),
            description: read_ascii(&buf[DESCRIPTION_OFFSET..]),
        })
    }

    /// Encode as a 384-byte record.
    ///
    /// Descriptions longer than [`MAX_DESCRIPTION_CHARS`] are truncated.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0u8; METADATA_RECORD_SIZE];
        buf[0x00] = self.num_players;
        buf[0x01] = self.vmu_blocks;
        buf[0x02..0x04].copy_from_slice(&self.accessories.to_le_bytes());
        buf[0x04] = self.network;
        buf[0x06..0x08].copy_from_slice(&self.genre.to_le_bytes());
        let written = write_ascii_terminated(&mut buf[DESCRIPTION_OFFSET..], &self.description);
        if written < self.description.chars().count() {
            log::debug!(
                "Description truncated to {} characters",
                MAX_DESCRIPTION_CHARS
            );
        }
        buf
    }
}

#[cfg(test)]
#[path = "tests/metadata_tests.rs"]
mod tests;
