#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A numeral contains a character outside its number system's alphabet.
    #[error("Invalid characters found for {system} number system on input: {input:?}")]
    Validation { input: String, system: String },
    /// The positional value does not fit in a `u64`.
    #[error("Numeral {input:?} in {system} number system exceeds the native integer range")]
    Overflow { input: String, system: String },
    #[error("Unsupported base: {0} (expected 2..=36)")]
    UnsupportedBase(u32),
    #[error("Unknown number system: {0}")]
    UnknownSystem(String),
    /// IO Error
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configure Error: {0}")]
    Config(String),
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(e) => e,
            other => std::io::Error::new(std::io::ErrorKind::InvalidInput, other),
        }
    }
}
