/// Container roles used by the boot menu.
///
/// All three files share the same container format; the role decides the
/// fixed record size and how a record's payload is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Full-size cover art (256x256 texture)
    Artwork,
    /// Menu icon (128x128 texture)
    Icon,
    /// Structured game metadata with a free-text description
    Metadata,
}

/// All role variants in file order.
const ALL_ROLES: &[Role] = &[Role::Artwork, Role::Icon, Role::Metadata];

/// Size of the texture sub-headers (GBIX + PVRT) preceding the pixel data.
pub const TEXTURE_HEADER_SIZE: usize = 32;

impl Role {
    /// Fixed payload size of every record in a container of this role.
    pub const fn record_size(&self) -> usize {
        match self {
            Self::Artwork => TEXTURE_HEADER_SIZE + 256 * 256 * 2,
            Self::Icon => TEXTURE_HEADER_SIZE + 128 * 128 * 2,
            Self::Metadata => 384,
        }
    }

    /// Edge length of the square texture stored by this role, if any.
    pub const fn texture_size(&self) -> Option<u16> {
        match self {
            Self::Artwork => Some(256),
            Self::Icon => Some(128),
            Self::Metadata => None,
        }
    }

    /// File name the menu firmware expects for this container.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Artwork => "BOX.DAT",
            Self::Icon => "ICON.DAT",
            Self::Metadata => "META.DAT",
        }
    }

    /// Canonical short name used for CLI arguments and log output.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Artwork => "artwork",
            Self::Icon => "icon",
            Self::Metadata => "metadata",
        }
    }

    /// All accepted names for this role (case-insensitive matching).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Artwork => &["artwork", "box", "box.dat", "cover"],
            Self::Icon => &["icon", "icons", "icon.dat"],
            Self::Metadata => &["metadata", "meta", "meta.dat"],
        }
    }

    /// All role variants.
    pub fn all() -> &'static [Role] {
        ALL_ROLES
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Error returned when a string cannot be parsed into a `Role`.
#[derive(Debug, Clone)]
pub struct RoleParseError(pub String);

impl std::fmt::Display for RoleParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown container role: '{}'", self.0)
    }
}

impl std::error::Error for RoleParseError {}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    /// Parse a role from its short name or any alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_ROLES
            .iter()
            .copied()
            .find(|role| role.aliases().contains(&lower.as_str()))
            .ok_or_else(|| RoleParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/role_tests.rs"]
mod tests;
