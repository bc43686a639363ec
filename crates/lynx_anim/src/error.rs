use core::fmt;

/// Animation error
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// Skeleton has no joints, too many joints, or a joint whose parent does not come before it
    InvalidSkeleton(String),
    /// Animation does not fit the skeleton it is played on, or has no length
    InvalidAnimation(String),
    /// Settings could not be parsed or contain invalid values
    InvalidSettings(String),
    /// The matrix palette could not be allocated
    OutOfMemory,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSkeleton(s)  => f.write_fmt(format_args!("Invalid skeleton: {s}")),
            Error::InvalidAnimation(s) => f.write_fmt(format_args!("Invalid animation: {s}")),
            Error::InvalidSettings(s)  => f.write_fmt(format_args!("Invalid settings: {s}")),
            Error::OutOfMemory         => f.write_str("Out of memory"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
