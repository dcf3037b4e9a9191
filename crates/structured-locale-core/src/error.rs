use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    InvalidTag(&'static str),
    InvalidFormat(&'static str),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidTag(message) => write!(f, "invalid language tag: {message}"),
            CoreError::InvalidFormat(message) => write!(f, "invalid format: {message}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}

#[cfg(test)]
mod tests {
    use super::CoreError;
    use alloc::string::ToString;

    #[test]
    fn display_formats_invalid_tag() {
        let err = CoreError::InvalidTag("language tag is empty");
        assert_eq!(err.to_string(), "invalid language tag: language tag is empty");
    }

    #[test]
    fn display_formats_invalid_format() {
        let err = CoreError::InvalidFormat("message id is empty");
        assert_eq!(err.to_string(), "invalid format: message id is empty");
    }
}
