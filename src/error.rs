use std::borrow::Cow;

/// Everything that can go wrong building, drawing, or running a dialog.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A value was rejected at construction, e.g. a negative [`Point`][crate::Point] component or an unknown cycle
    /// mode.
    #[error("invalid argument: {0}")]
    InvalidArgument(Cow<'static, str>),
    /// Styled text was indexed past its end.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// The operation exists but isn't implemented for these inputs, e.g. the 16-color mode.
    #[error("not supported: {0}")]
    NotSupported(Cow<'static, str>),
    /// A styled value of the wrong length was assigned into a fixed-size slot.
    #[error("shape mismatch: expected {expected} character(s), got {got}")]
    ShapeMismatch { expected: usize, got: usize },
    /// No interactive backend was compiled in.
    #[error("no key-reading backend available: {0}")]
    NoBackend(&'static str),
    /// An `io::Error` occurred talking to the terminal.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Writing escape codes into a buffer failed.
    #[error("failed to format output")]
    Format(#[from] core::fmt::Error),
    /// A TOML configuration couldn't be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn unsupported(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::NotSupported(msg.into())
    }
}

pub type Result<T> = core::result::Result<T, Error>;
