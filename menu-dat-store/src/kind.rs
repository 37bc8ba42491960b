use menu_dat_core::Role;

/// Compile-time description of a container's role.
///
/// Implemented by zero-sized markers so each container type carries its
/// record size in the type system.
pub trait RecordKind {
    const ROLE: Role;
    const RECORD_SIZE: usize = Self::ROLE.record_size();
}

/// Containers whose records are square textures.
pub trait TextureKind: RecordKind {
    const TEXTURE_SIZE: u32;
}

/// Marker for BOX.DAT (256x256 cover art).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Artwork;

/// Marker for ICON.DAT (128x128 menu icons).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Icon;

/// Marker for META.DAT (384-byte metadata records).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metadata;

impl RecordKind for Artwork {
    const ROLE: Role = Role::Artwork;
}

impl RecordKind for Icon {
    const ROLE: Role = Role::Icon;
}

impl RecordKind for Metadata {
    const ROLE: Role = Role::Metadata;
}

impl TextureKind for Artwork {
    const TEXTURE_SIZE: u32 = 256;
}

impl TextureKind for Icon {
    const TEXTURE_SIZE: u32 = 128;
}
