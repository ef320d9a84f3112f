use std::fmt;

/// Textual form of a number awaiting interpretation in some [`NumberSystem`].
///
/// Native integers are coerced through their decimal string form, so
/// `Numeral::from(11010111u32)` reads as the binary digits `11010111`.
///
/// [`NumberSystem`]: crate::number_system::NumberSystem
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Numeral(String);

impl Numeral {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Numeral {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Numeral {
    fn from(s: &str) -> Self {
        Numeral(s.to_string())
    }
}

impl From<String> for Numeral {
    fn from(s: String) -> Self {
        Numeral(s)
    }
}

impl From<&String> for Numeral {
    fn from(s: &String) -> Self {
        Numeral(s.clone())
    }
}

macro_rules! numeral_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Numeral {
                fn from(n: $t) -> Self {
                    Numeral(n.to_string())
                }
            }
        )*
    };
}

numeral_from_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
