use std::fmt;

/// Malformed grid text. Anything that makes the file unusable as an
/// H x W x 3 pixel grid ends up here; I/O and image codec failures
/// keep their own error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Header line does not contain exactly three integers
    BadHeader(String),
    /// Header declared a channel count other than 3
    ChannelCount(usize),
    /// File ended before all declared rows were read
    MissingRows { expected: usize, found: usize },
    /// Total data token count does not match height * width * 3
    TokenCount { expected: usize, found: usize },
    /// A data token is not a non-negative integer in u16 range
    BadToken(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::BadHeader(line) => {
                write!(f, "header must be three integers \"H W C\", got {line:?}")
            }
            FormatError::ChannelCount(c) => {
                write!(f, "only 3-channel RGB grids are supported, got C={c}")
            }
            FormatError::MissingRows { expected, found } => {
                write!(f, "expected {expected} data rows, file ended after {found}")
            }
            FormatError::TokenCount { expected, found } => {
                write!(f, "expected {expected} pixel values, got {found}")
            }
            FormatError::BadToken(token) => {
                write!(f, "invalid pixel value {token:?}")
            }
        }
    }
}

impl std::error::Error for FormatError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = FormatError::BadHeader("3 2".to_string());
        assert!(err.to_string().contains("3 2"));

        let err = FormatError::ChannelCount(4);
        assert!(err.to_string().contains("C=4"));

        let err = FormatError::MissingRows {
            expected: 5,
            found: 3,
        };
        assert!(err.to_string().contains('5'));
        assert!(err.to_string().contains('3'));

        let err = FormatError::TokenCount {
            expected: 12,
            found: 10,
        };
        assert!(err.to_string().contains("12"));

        let err = FormatError::BadToken("abc".to_string());
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = FormatError::ChannelCount(1).into();
        let format_err = err.downcast_ref::<FormatError>();
        assert_eq!(format_err, Some(&FormatError::ChannelCount(1)));
    }
}
