pub mod config;
pub mod converter;
pub mod errors;
pub mod number_system;
pub mod numeral;

pub use converter::{
    Converter, convert, convert_radix, format_from_integer, from_decimal, parse_to_integer,
    to_decimal,
};
pub use number_system::NumberSystem;
pub use numeral::Numeral;

pub type Result<T> = std::result::Result<T, errors::Error>;
