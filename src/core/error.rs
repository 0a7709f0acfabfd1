use std::fmt;

#[derive(Debug)]
pub enum ErrorKind {
    Parse,
    InvalidArgument,
    Unsupported,
    Internal,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: String) -> Self {
        Error { kind, context }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.context)
    }
}

impl std::error::Error for Error {}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error {
            kind: ErrorKind::InvalidArgument,
            context: format!("invalid pattern: {}", err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
