use thiserror::Error;

/// Errors produced while fetching, mapping, or exporting placemarks.
#[derive(Debug, Error)]
pub enum Error {
    #[error("network error: failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("network error fetching {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("network error: {url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("parse error near `{snippet}`")]
    Parse {
        snippet: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("parse error: element {index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("missing field: placemark {index} has no valid `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("io error")]
    Io(#[from] std::io::Error),

    #[error("io error writing CSV")]
    Csv(#[from] csv::Error),

    #[error("config error in {path}: {reason}")]
    Config { path: String, reason: String },
}

/// Coarse grouping of [`Error`] variants, as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Parse,
    Io,
    Config,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Client(_) | Error::Network { .. } | Error::Status { .. } => ErrorKind::Network,
            Error::Parse { .. } | Error::NotAnObject { .. } | Error::MissingField { .. } => {
                ErrorKind::Parse
            }
            Error::Io(_) | Error::Csv(_) => ErrorKind::Io,
            Error::Config { .. } => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
