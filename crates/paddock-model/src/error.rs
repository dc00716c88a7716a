use thiserror::Error;

/// Validation failure on entity input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("{field} must not be blank")]
    BlankField { field: &'static str },

    #[error("age {age} is outside the allowed range 18-100")]
    AgeOutOfRange { age: u8 },

    #[error("{rating} rating {value} is outside the allowed range 1-100")]
    RatingOutOfRange { rating: &'static str, value: u8 },
}

pub type Result<T> = std::result::Result<T, ModelError>;
