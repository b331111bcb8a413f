use thiserror::Error;

/// Error type for charset detection and conversion operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The charset label does not resolve to any known encoding.
    #[error("invalid encoding name")]
    InvalidName,

    /// The encoding is not associated with a known charset name.
    #[error("unknown encoding")]
    Unknown,

    /// The encoding exists but neither registry supports it.
    #[error("this encoding is not supported")]
    Unsupported,

    /// The decoder could not make sense of the input bytes. Both an invalid
    /// byte and a truncated sequence at end of input collapse to this tag:
    /// mis-pairing bytes with a decoder is vastly more common than either
    /// specific fault.
    #[error("wrong decoder")]
    WrongDecoder,

    /// The statistical detector failed; its message is passed through as-is.
    #[error("detector: {0}")]
    Detector(String),
}

/// Result type alias for detection and conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
