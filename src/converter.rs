//! Positional conversion between number systems.
//!
//! Every conversion goes through a `u64`: [`parse_to_integer`] decodes a
//! numeral with Horner's method and [`format_from_integer`] re-encodes it by
//! repeated division. [`convert`] is the composition of the two.

use crate::{
    Result,
    config::ConverterConfig,
    errors::Error,
    number_system::NumberSystem,
    numeral::Numeral,
};

/// Decodes `numeral` as a number written in `source`.
///
/// Fails with [`Error::Validation`] when the numeral is empty or holds a
/// character outside the source alphabet, and with [`Error::Overflow`] when
/// its value does not fit in a `u64`.
pub fn parse_to_integer(numeral: impl Into<Numeral>, source: &NumberSystem) -> Result<u64> {
    let numeral = numeral.into();
    let text = numeral.as_str();
    source.validate(text)?;

    let base = u64::from(source.base());
    let mut value: u64 = 0;
    for digit in text.chars() {
        let digit = source.digit_value(digit).ok_or_else(|| Error::Validation {
            input: text.to_string(),
            system: source.name().into_owned(),
        })?;
        value = value
            .checked_mul(base)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or_else(|| Error::Overflow {
                input: text.to_string(),
                system: source.name().into_owned(),
            })?;
    }

    tracing::debug!(input = text, system = %source, value, "parsed numeral");
    Ok(value)
}

/// Encodes `value` with the digits of `target`, most significant first.
///
/// Zero encodes as `"0"`.
pub fn format_from_integer(value: u64, target: &NumberSystem) -> String {
    let base = u64::from(target.base());
    let alphabet = target.digit_alphabet().as_bytes();
    let mut digits = Vec::new();
    let mut rest = value;
    while rest > 0 {
        digits.push(alphabet[(rest % base) as usize] as char);
        rest /= base;
    }

    let output = if digits.is_empty() {
        "0".to_string()
    } else {
        digits.iter().rev().collect()
    };
    tracing::debug!(value, system = %target, output = output.as_str(), "formatted integer");
    output
}

/// Rewrites `numeral` from `source` into `target`.
pub fn convert(
    numeral: impl Into<Numeral>,
    source: &NumberSystem,
    target: &NumberSystem,
) -> Result<String> {
    let value = parse_to_integer(numeral, source)?;
    Ok(format_from_integer(value, target))
}

/// Same as [`convert`] with plain integer bases in `2..=36`.
pub fn convert_radix(numeral: impl Into<Numeral>, from_base: u32, to_base: u32) -> Result<String> {
    let source = NumberSystem::radix(from_base)?;
    let target = NumberSystem::radix(to_base)?;
    convert(numeral, &source, &target)
}

/// Decodes a hexadecimal numeral.
pub fn to_decimal(numeral: impl Into<Numeral>) -> Result<u64> {
    parse_to_integer(numeral, &NumberSystem::default())
}

/// Encodes `value` in hexadecimal.
pub fn from_decimal(value: u64) -> String {
    format_from_integer(value, &NumberSystem::default())
}

/// Conversion with configured default systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Converter {
    source: NumberSystem,
    target: NumberSystem,
}

impl Converter {
    pub fn new(source: NumberSystem, target: NumberSystem) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> &NumberSystem {
        &self.source
    }

    pub fn target(&self) -> &NumberSystem {
        &self.target
    }

    pub fn parse(&self, numeral: impl Into<Numeral>) -> Result<u64> {
        parse_to_integer(numeral, &self.source)
    }

    pub fn format(&self, value: u64) -> String {
        format_from_integer(value, &self.target)
    }

    pub fn convert(&self, numeral: impl Into<Numeral>) -> Result<String> {
        convert(numeral, &self.source, &self.target)
    }
}

impl From<&ConverterConfig> for Converter {
    fn from(config: &ConverterConfig) -> Self {
        Self::new(config.default_source, config.default_target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIN: NumberSystem = NumberSystem::BINARY;
    const OCT: NumberSystem = NumberSystem::OCTAL;
    const DEC: NumberSystem = NumberSystem::DECIMAL;
    const HEX: NumberSystem = NumberSystem::HEXADECIMAL;

    #[test]
    fn test_parse_to_integer() {
        assert_eq!(parse_to_integer("A1F", &HEX).unwrap(), 2591);
        assert_eq!(parse_to_integer("a1f", &HEX).unwrap(), 2591);
        assert_eq!(parse_to_integer("11010111", &BIN).unwrap(), 215);
        assert_eq!(parse_to_integer(11010111u32, &BIN).unwrap(), 215);
        assert_eq!(parse_to_integer("0007", &OCT).unwrap(), 7);
        assert_eq!(parse_to_integer("0", &DEC).unwrap(), 0);
    }

    #[test]
    fn test_parse_to_integer_rejects_foreign_digits() {
        assert!(parse_to_integer("1G", &HEX).unwrap_err().is_validation());
        assert!(parse_to_integer(12u32, &BIN).unwrap_err().is_validation());
        assert!(parse_to_integer(19u32, &OCT).unwrap_err().is_validation());
        assert!(parse_to_integer("1A", &DEC).unwrap_err().is_validation());
        assert!(parse_to_integer(-1i32, &DEC).unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_to_integer_rejects_empty() {
        let err = parse_to_integer("", &HEX).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_parse_to_integer_overflow() {
        assert_eq!(parse_to_integer("FFFFFFFFFFFFFFFF", &HEX).unwrap(), u64::MAX);
        assert_eq!(
            parse_to_integer("18446744073709551615", &DEC).unwrap(),
            u64::MAX
        );
        assert!(matches!(
            parse_to_integer("10000000000000000", &HEX),
            Err(Error::Overflow { .. })
        ));
        assert!(matches!(
            parse_to_integer("18446744073709551616", &DEC),
            Err(Error::Overflow { .. })
        ));
    }

    #[test]
    fn test_format_from_integer() {
        assert_eq!(format_from_integer(215, &HEX), "D7");
        assert_eq!(format_from_integer(215, &BIN), "11010111");
        assert_eq!(format_from_integer(2591, &OCT), "5037");
        assert_eq!(format_from_integer(u64::MAX, &HEX), "FFFFFFFFFFFFFFFF");
    }

    #[test]
    fn test_format_highest_digit_of_every_base() {
        for base in 2..=36u32 {
            let system = NumberSystem::radix(base).unwrap();
            let last = system.digit_alphabet().chars().last().unwrap();
            assert_eq!(format_from_integer(u64::from(base) - 1, &system), last.to_string());
            assert_eq!(format_from_integer(u64::from(base), &system), "10");
            let expected: String = [last, last].iter().collect();
            let two_digits = u64::from(base) * u64::from(base) - 1;
            assert_eq!(format_from_integer(two_digits, &system), expected);
        }
    }

    #[test]
    fn test_format_zero() {
        for system in [BIN, OCT, DEC, HEX] {
            assert_eq!(format_from_integer(0, &system), "0");
        }
        assert_eq!(format_from_integer(0, &NumberSystem::radix(36).unwrap()), "0");
    }

    #[test]
    fn test_convert() {
        assert_eq!(convert("A1F", &HEX, &OCT).unwrap(), "5037");
        assert_eq!(convert("11010111", &BIN, &HEX).unwrap(), "D7");
        assert_eq!(convert(11010111u64, &BIN, &HEX).unwrap(), "D7");
    }

    #[test]
    fn test_convert_propagates_validation() {
        let err = convert("1G", &HEX, &BIN).unwrap_err();
        match err {
            Error::Validation { input, system } => {
                assert_eq!(input, "1G");
                assert_eq!(system, "hexadecimal");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_convert_to_same_base_normalizes() {
        assert_eq!(convert("ff", &HEX, &HEX).unwrap(), "FF");
        assert_eq!(convert("00101", &BIN, &BIN).unwrap(), "101");
        assert_eq!(convert("000", &OCT, &OCT).unwrap(), "0");
    }

    #[test]
    fn test_round_trip() {
        let samples = [0u64, 1, 7, 8, 15, 16, 215, 2591, 65535, 1 << 40, u64::MAX];
        for system in [BIN, OCT, DEC, HEX] {
            for n in samples {
                let text = format_from_integer(n, &system);
                assert_eq!(parse_to_integer(text.as_str(), &system).unwrap(), n);
            }
        }
    }

    #[test]
    fn test_decimal_default_helpers() {
        assert_eq!(from_decimal(215), "D7");
        assert_eq!(to_decimal("D7").unwrap(), 215);
    }

    #[test]
    fn test_convert_radix() {
        assert_eq!(convert_radix("zz", 36, 10).unwrap(), "1295");
        assert_eq!(convert_radix("A1F", 16, 8).unwrap(), "5037");
        assert_eq!(convert_radix(11010111u32, 2, 16).unwrap(), "D7");
        assert_eq!(convert_radix("120", 3, 7).unwrap(), "21");
        assert!(matches!(
            convert_radix("1", 1, 10),
            Err(Error::UnsupportedBase(1))
        ));
        assert!(matches!(
            convert_radix("1", 10, 37),
            Err(Error::UnsupportedBase(37))
        ));
    }

    #[test]
    fn test_converter_defaults() {
        let converter = Converter::default();
        assert_eq!(converter.source(), &HEX);
        assert_eq!(converter.target(), &HEX);

        let converter = Converter::new(BIN, OCT);
        assert_eq!(converter.parse("1000").unwrap(), 8);
        assert_eq!(converter.format(8), "10");
        assert_eq!(converter.convert("11111111").unwrap(), "377");
    }
}
