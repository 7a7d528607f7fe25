use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NumeralError {
    #[error("value {value} is outside the Roman numeral range [1, 3999]")]
    OutOfRange { value: i32 },
    #[error("'{character}' is not a Roman numeral character")]
    IllegalCharacter { character: char },
    #[error("intermediate total exceeds i32::MAX")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, NumeralError>;
