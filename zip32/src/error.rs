use std::convert::From;
use std::{fmt, io};

#[derive(Debug)]
pub enum Error {
    BufferTooShort { needed: usize, available: usize },
    IoError(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::BufferTooShort { needed, available } => write!(
                f,
                "buffer too short: {} bytes needed, {} available",
                needed, available
            ),
            Error::IoError(e) => write!(f, "io error: {}", e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::IoError(e)
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display_buffer_too_short() {
        let err = Error::BufferTooShort {
            needed: 4,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "buffer too short: 4 bytes needed, 2 available"
        );
    }
}
