use thiserror::Error;

use menu_dat_store::ContainerError;
use menu_dat_texture::TextureError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Container load, edit or save failed
    #[error("{0}")]
    Container(#[from] ContainerError),

    /// Image could not be read, encoded or written
    #[error("{0}")]
    Texture(#[from] TextureError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Serial has no entry in the container
    #[error("No {role} entry for '{serial}'")]
    NotFound { role: String, serial: String },

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn not_found(role: impl ToString, serial: impl Into<String>) -> Self {
        Self::NotFound {
            role: role.to_string(),
            serial: serial.into(),
        }
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
