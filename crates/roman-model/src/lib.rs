pub mod error;
pub mod numeral;
pub mod symbol;

pub use error::{NumeralError, Result};
pub use numeral::{Numeral, decode_relaxed, is_canonical};
