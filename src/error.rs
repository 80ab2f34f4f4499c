use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidNameError {
    #[error("base name cannot be empty")]
    Empty,

    #[error("base name '{base}' has no letters or digits left after sanitization")]
    NoAlphanumeric { base: String },
}

pub type Result<T> = std::result::Result<T, InvalidNameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_display() {
        let err = InvalidNameError::Empty;
        assert_eq!(err.to_string(), "base name cannot be empty");
    }

    #[test]
    fn no_alphanumeric_display() {
        let err = InvalidNameError::NoAlphanumeric {
            base: "---___".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "base name '---___' has no letters or digits left after sanitization"
        );
    }

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = InvalidNameError::Empty.into();

        match err.downcast_ref::<InvalidNameError>() {
            Some(InvalidNameError::Empty) => {}
            _ => panic!("expected InvalidNameError::Empty"),
        }
    }
}
