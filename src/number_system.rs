//! Number system descriptors.
//!
//! A [`NumberSystem`] is an immutable record: a base, a label and the ordered
//! digit alphabet where a character's index is its digit value. The four
//! canonical systems are associated constants; any other radix up to 36 is
//! built from the prefix of [`DIGITS`].

use crate::{Result, errors::Error};
use std::{borrow::Cow, fmt, str::FromStr};

/// Every digit symbol a system may use, in value order.
pub const DIGITS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = DIGITS.len() as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberSystem {
    base: u32,
    name: Option<&'static str>,
    digit_alphabet: &'static str,
}

impl NumberSystem {
    pub const BINARY: NumberSystem = NumberSystem {
        base: 2,
        name: Some("binary"),
        digit_alphabet: "01",
    };
    pub const OCTAL: NumberSystem = NumberSystem {
        base: 8,
        name: Some("octal"),
        digit_alphabet: "01234567",
    };
    pub const DECIMAL: NumberSystem = NumberSystem {
        base: 10,
        name: Some("decimal"),
        digit_alphabet: "0123456789",
    };
    pub const HEXADECIMAL: NumberSystem = NumberSystem {
        base: 16,
        name: Some("hexadecimal"),
        digit_alphabet: "0123456789ABCDEF",
    };

    /// Returns the system for `base`.
    ///
    /// Bases 2, 8, 10 and 16 resolve to the canonical constants; the rest of
    /// `2..=36` get an anonymous system named `base-N`.
    pub fn radix(base: u32) -> Result<NumberSystem> {
        match base {
            2 => Ok(Self::BINARY),
            8 => Ok(Self::OCTAL),
            10 => Ok(Self::DECIMAL),
            16 => Ok(Self::HEXADECIMAL),
            MIN_BASE..=MAX_BASE => Ok(NumberSystem {
                base,
                name: None,
                digit_alphabet: &DIGITS[..base as usize],
            }),
            _ => Err(Error::UnsupportedBase(base)),
        }
    }

    pub const fn base(&self) -> u32 {
        self.base
    }

    pub fn name(&self) -> Cow<'static, str> {
        match self.name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("base-{}", self.base)),
        }
    }

    pub const fn digit_alphabet(&self) -> &'static str {
        self.digit_alphabet
    }

    /// Value of a single digit, case-insensitive for alphabetic digits.
    pub fn digit_value(&self, digit: char) -> Option<u32> {
        let digit = digit.to_ascii_uppercase();
        self.digit_alphabet
            .chars()
            .position(|c| c == digit)
            .map(|index| index as u32)
    }

    /// Digit symbol for `value`, or `None` when `value >= base`.
    pub fn digit_char(&self, value: u32) -> Option<char> {
        self.digit_alphabet.chars().nth(value as usize)
    }

    /// Checks that `numeral` is non-empty and made only of this system's digits.
    pub fn validate(&self, numeral: &str) -> Result<()> {
        if numeral.is_empty() || numeral.chars().any(|c| self.digit_value(c).is_none()) {
            return Err(Error::Validation {
                input: numeral.to_string(),
                system: self.name().into_owned(),
            });
        }
        Ok(())
    }
}

impl Default for NumberSystem {
    fn default() -> Self {
        Self::HEXADECIMAL
    }
}

impl fmt::Display for NumberSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for NumberSystem {
    type Err = Error;

    /// Accepts `binary`/`bin`, `octal`/`oct`, `decimal`/`dec`,
    /// `hexadecimal`/`hex`, a bare base such as `36` or `base-36`.
    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "binary" | "bin" => Ok(Self::BINARY),
            "octal" | "oct" => Ok(Self::OCTAL),
            "decimal" | "dec" => Ok(Self::DECIMAL),
            "hexadecimal" | "hex" => Ok(Self::HEXADECIMAL),
            other => {
                let digits = other.strip_prefix("base-").unwrap_or(other);
                let base = digits
                    .parse::<u32>()
                    .map_err(|_| Error::UnknownSystem(s.to_string()))?;
                Self::radix(base)
            }
        }
    }
}

/// Serializes a [`NumberSystem`] as its name, for use with `#[serde(with)]`.
pub mod string_to_system {
    use super::NumberSystem;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(system: &NumberSystem, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&system.name())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NumberSystem, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<NumberSystem>()
            .map_err(|e| D::Error::custom(format!("Invalid number system: {}", e)))
    }
}
