use serde::{Deserialize, Serialize};

/// memsim errors. None of these are fatal: every engine call either returns a
/// decision or one of these refusals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Error {
    /// The simulation was configured with values it cannot run with, e.g. zero
    /// frames or an empty hole list. Raised before any state is built.
    InvalidConfiguration(String),
    /// Malformed user input, typically a token that failed to parse.
    InvalidInput(String),
    /// A step was requested after the last reference was already processed.
    Exhausted,
    /// An IO error while reading commands.
    IO(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            Error::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Error::Exhausted => write!(f, "simulation complete"),
            Error::IO(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl Error {
    /// Returns true for the "nothing left to step" condition, which callers
    /// should treat as completion rather than failure.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Error::Exhausted)
    }
}

/// Constructs an Error::InvalidConfiguration via format!() and into().
#[macro_export]
macro_rules! errconfig {
    ($($args:tt)*) => { $crate::Error::InvalidConfiguration(format!($($args)*)).into() };
}

/// Constructs an Error::InvalidInput via format!() and into().
#[macro_export]
macro_rules! errinput {
    ($($args:tt)*) => { $crate::Error::InvalidInput(format!($($args)*)).into() };
}

/// A memsim Result returning Error.
pub type Result<T> = std::result::Result<T, Error>;

impl<T> From<Error> for Result<T> {
    fn from(error: Error) -> Self {
        Err(error)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IO(err.to_string())
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Self {
        Error::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refuse_zero(frames: usize) -> Result<usize> {
        if frames == 0 {
            return errconfig!("frame count must be at least 1, got {}", frames);
        }
        Ok(frames)
    }

    #[test]
    fn test_errconfig_into_result() {
        assert_eq!(
            refuse_zero(0),
            Err(Error::InvalidConfiguration(
                "frame count must be at least 1, got 0".to_string()
            ))
        );
        assert_eq!(refuse_zero(3), Ok(3));
    }

    #[test]
    fn test_errinput_into_error() {
        let err: Error = errinput!("bad token {:?}", "x1");
        assert_eq!(err, Error::InvalidInput("bad token \"x1\"".to_string()));
    }

    #[test]
    fn test_is_exhausted() {
        assert!(Error::Exhausted.is_exhausted());
        assert!(!Error::IO("closed".to_string()).is_exhausted());
    }

    #[test]
    fn test_display() {
        assert_eq!(Error::Exhausted.to_string(), "simulation complete");
        assert_eq!(
            Error::InvalidInput("-3".to_string()).to_string(),
            "invalid input: -3"
        );
    }

    #[test]
    fn test_from_parse_int_error() {
        let err: Error = "abc".parse::<u64>().unwrap_err().into();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
