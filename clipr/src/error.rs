//! Clipboard error handling

use compact_str::CompactString;
use thiserror::Error;

pub type ClipResult<T> = Result<T, ClipError>;

/// Clipboard failures, cheap to clone and carry across the UI layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(CompactString),

    #[error("Clipboard write failed: {0}")]
    WriteFailed(CompactString),

    #[error("Clipboard configuration error: {0}")]
    ConfigError(CompactString),
}

impl ClipError {
    #[inline]
    pub fn unavailable(reason: impl Into<CompactString>) -> Self {
        Self::Unavailable(reason.into())
    }

    #[inline]
    pub fn write_failed(reason: impl Into<CompactString>) -> Self {
        Self::WriteFailed(reason.into())
    }
}

#[cfg(feature = "system")]
impl From<arboard::Error> for ClipError {
    fn from(err: arboard::Error) -> Self {
        match err {
            arboard::Error::ClipboardNotSupported => {
                ClipError::Unavailable(CompactString::const_new("clipboard not supported"))
            }
            arboard::Error::ClipboardOccupied => {
                ClipError::WriteFailed(CompactString::const_new("clipboard occupied"))
            }
            other => ClipError::WriteFailed(CompactString::from(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ClipError::unavailable("no display");
        assert_eq!(err.to_string(), "Clipboard unavailable: no display");
    }
}
