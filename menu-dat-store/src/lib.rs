//! Container manager for the boot-menu artwork, icon and metadata files.
//!
//! BOX.DAT, ICON.DAT and META.DAT share one format: a small header, an index
//! of serial keys with slot numbers, and fixed-size records. [`Container`]
//! loads, edits and rewrites them; the role is fixed by a marker type.

pub mod backup;
pub mod container;
pub mod error;
pub mod format;
pub mod icons;
pub mod kind;
pub mod metadata;
pub mod payload;

pub use container::{ArtworkStore, Container, ContainerState, Entry, IconStore, MetadataStore};
pub use error::{ContainerError, FormatError};
pub use icons::{RegenerateSummary, regenerate_icons};
pub use kind::{Artwork, Icon, Metadata, RecordKind, TextureKind};
pub use metadata::MetadataRecord;
pub use payload::Payload;
