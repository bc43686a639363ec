use thiserror::Error;

/// Errors that stop the application from starting
#[derive(Error, Clone, PartialEq, Debug)]
pub enum Error {
    /// Settings file exists, but could not be read
    #[error("failed to read '{path}': {message}")]
    Read { path: String, message: String },

    /// Settings file is not a valid settings document
    #[error("failed to parse settings: {0}")]
    Parse(String),

    /// Settings parsed, but contain a value the application cannot run with
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Scene or animation setup failed
    #[error(transparent)]
    Anim(#[from] lynx_anim::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
