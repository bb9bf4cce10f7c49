use std::convert::From;
use std::error::Error as StdError;
use std::fmt;
use std::io::Error as IoError;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(Debug)]
pub enum ErrorKind {
    /// input rejected before any state change (e.g. a blank title)
    Validation,
    /// a position or id that doesn't reference a note
    Selection,
    Chrono(chrono::ParseError),
    InternalIo(IoError),
    Json(serde_json::Error),
    Yaml(serde_yaml::Error),
    Regex(regex::Error),
    Generic,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub desc: String,
    pub detail: Option<String>,
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation)
    }

    pub fn is_selection(&self) -> bool {
        matches!(self.kind, ErrorKind::Selection)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.detail {
            Some(ref d) => write!(f, "{}: {}", self.desc, d),
            None => write!(f, "{}", self.desc),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self.kind {
            ErrorKind::Chrono(ref e) => Some(e),
            ErrorKind::InternalIo(ref e) => Some(e),
            ErrorKind::Json(ref e) => Some(e),
            ErrorKind::Yaml(ref e) => Some(e),
            ErrorKind::Regex(ref e) => Some(e),
            _ => None,
        }
    }
}

#[macro_export]
macro_rules! specific_fail {
    ($short:expr) => {{
        use $crate::errors::{Error, ErrorKind};
        Err(::std::convert::From::from(Error {
            kind: ErrorKind::Generic,
            desc: $short,
            detail: None,
        }))
    }};
}

#[macro_export]
macro_rules! specific_fail_str {
    ($s:expr) => {
        $crate::specific_fail!($s.to_string())
    };
}

#[macro_export]
macro_rules! validation_fail {
    ($short:expr) => {{
        use $crate::errors::{Error, ErrorKind};
        Err(Error {
            kind: ErrorKind::Validation,
            desc: $short.to_string(),
            detail: None,
        })
    }};
}

#[macro_export]
macro_rules! selection_fail {
    ($short:expr) => {{
        use $crate::errors::{Error, ErrorKind};
        Err(Error {
            kind: ErrorKind::Selection,
            desc: $short.to_string(),
            detail: None,
        })
    }};
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Error {
        Error {
            desc: "failed to parse date/time".to_string(),
            detail: Some(err.to_string()),
            kind: ErrorKind::Chrono(err),
        }
    }
}

impl From<IoError> for Error {
    fn from(err: IoError) -> Error {
        Error {
            desc: err.to_string(),
            detail: None,
            kind: ErrorKind::InternalIo(err),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error {
            desc: "JSON error".to_string(),
            detail: Some(err.to_string()),
            kind: ErrorKind::Json(err),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Error {
        Error {
            desc: "YAML error".to_string(),
            detail: Some(err.to_string()),
            kind: ErrorKind::Yaml(err),
        }
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Error {
        Error {
            desc: "regex error".to_string(),
            detail: Some(err.to_string()),
            kind: ErrorKind::Regex(err),
        }
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Error {
        Error {
            kind: ErrorKind::Generic,
            desc: "formatting error".to_string(),
            detail: None,
        }
    }
}

impl From<String> for Error {
    fn from(err: String) -> Error {
        Error {
            kind: ErrorKind::Generic,
            desc: err,
            detail: None,
        }
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Error {
        Error {
            kind: ErrorKind::Generic,
            desc: err.to_string(),
            detail: None,
        }
    }
}
