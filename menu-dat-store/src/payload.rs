use menu_dat_core::{Role, TEXTURE_HEADER_SIZE};
use menu_dat_texture::{DecodedTexture, decode, encode};

use crate::container::{Container, MetadataStore};
use crate::error::ContainerError;
use crate::kind::{RecordKind, TextureKind};
use crate::metadata::MetadataRecord;

/// A record payload interpreted according to its container role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Raw 256x256 texture bytes (header included)
    Texture256(Vec<u8>),
    /// Raw 128x128 texture bytes (header included)
    Texture128(Vec<u8>),
    Metadata(MetadataRecord),
}

impl Payload {
    /// Interpret raw record bytes for a container of `role`.
    pub fn interpret(role: Role, bytes: &[u8]) -> Result<Self, ContainerError> {
        if bytes.len() != role.record_size() {
            return Err(ContainerError::PayloadSize {
                expected: role.record_size(),
                actual: bytes.len(),
            });
        }
        Ok(match role {
            Role::Artwork => Self::Texture256(bytes.to_vec()),
            Role::Icon => Self::Texture128(bytes.to_vec()),
            Role::Metadata => Self::Metadata(MetadataRecord::from_bytes(bytes)?),
        })
    }

    /// The container role that stores this kind of payload.
    pub fn role(&self) -> Role {
        match self {
            Self::Texture256(_) => Role::Artwork,
            Self::Texture128(_) => Role::Icon,
            Self::Metadata(_) => Role::Metadata,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Texture256(bytes) | Self::Texture128(bytes) => bytes,
            Self::Metadata(record) => record.to_bytes(),
        }
    }

    /// Pixel data without the texture header, for texture payloads.
    pub fn pixel_data(&self) -> Option<&[u8]> {
        match self {
            Self::Texture256(bytes) | Self::Texture128(bytes) => bytes.get(TEXTURE_HEADER_SIZE..),
            Self::Metadata(_) => None,
        }
    }
}

impl<K: RecordKind> Container<K> {
    /// Stored payload for `serial`, interpreted for this container's role.
    pub fn get_payload(&self, serial: &str) -> Option<Payload> {
        self.get(serial)
            .and_then(|bytes| Payload::interpret(K::ROLE, bytes).ok())
    }

    /// Store a typed payload, rejecting one meant for another role.
    pub fn set_payload(&mut self, serial: &str, payload: Payload) -> Result<(), ContainerError> {
        if payload.role() != K::ROLE {
            return Err(ContainerError::PayloadRole {
                expected: K::ROLE,
                actual: payload.role(),
            });
        }
        self.set(serial, payload.into_bytes())
    }
}

impl<K: TextureKind> Container<K> {
    /// Encode `image` at this container's texture size and store it.
    pub fn set_image(
        &mut self,
        serial: &str,
        image: &image::DynamicImage,
    ) -> Result<(), ContainerError> {
        let bytes = encode(image, K::TEXTURE_SIZE, K::TEXTURE_SIZE)?;
        self.set(serial, bytes)
    }

    /// Decode the stored texture for `serial`.
    pub fn get_image(&self, serial: &str) -> Option<DecodedTexture> {
        self.get(serial).and_then(decode)
    }
}

impl MetadataStore {
    pub fn get_record(&self, serial: &str) -> Option<MetadataRecord> {
        self.get(serial)
            .and_then(|bytes| MetadataRecord::from_bytes(bytes).ok())
    }

    pub fn set_record(&mut self, serial: &str, record: &MetadataRecord) -> Result<(), ContainerError> {
        self.set(serial, record.to_bytes())
    }
}

#[cfg(test)]
#[path = "tests/payload_tests.rs"]
mod tests;
