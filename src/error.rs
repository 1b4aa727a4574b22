use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Memory errors
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("index {index} is out of bounds for a buffer of length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("could not reserve {words} words")]
    AllocationFailed { words: usize },
}

impl MemoryError {
    /// Error for a range `[start, start + length)` that does not fit in `len`.
    pub fn range(start: usize, length: usize, len: usize) -> Self {
        Self::OutOfBounds {
            index: start.saturating_add(length),
            len,
        }
    }
}

// =============================================================================
// Data conversion errors
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("base {0} is not supported (expected 2 to 16)")]
    InvalidBase(u32),

    #[error("output buffer too small: need {required} bytes, have {available}")]
    BufferTooSmall { required: usize, available: usize },

    #[error("no digits to convert")]
    Empty,

    #[error("invalid digit {:?} at position {position}", as_char(.byte))]
    InvalidDigit { position: usize, byte: u8 },

    #[error("value does not fit in a 32-bit signed integer")]
    Overflow,

    #[error(transparent)]
    Memory(#[from] MemoryError),
}

fn as_char(byte: &u8) -> char {
    char::from(*byte)
}

// =============================================================================
// Configuration errors
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Crate-level error
// =============================================================================

#[derive(Error, Debug)]
pub enum CourseError {
    #[error(transparent)]
    Memory(#[from] MemoryError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("data set is empty")]
    EmptyDataSet,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = CourseError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_digit_message_shows_character() {
        let err = DataError::InvalidDigit {
            position: 3,
            byte: b'G',
        };
        assert_eq!(err.to_string(), "invalid digit 'G' at position 3");
    }

    #[test]
    fn test_range_error_reports_end() {
        let err = MemoryError::range(6, 4, 8);
        assert_eq!(err, MemoryError::OutOfBounds { index: 10, len: 8 });
    }

    #[test]
    fn test_memory_error_converts_into_course_error() {
        let err: CourseError = MemoryError::AllocationFailed { words: 4 }.into();
        assert!(matches!(err, CourseError::Memory(_)));
        assert_eq!(err.to_string(), "could not reserve 4 words");
    }
}
