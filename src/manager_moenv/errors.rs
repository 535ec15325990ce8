use std::fmt;

/// Error representing an unexpected outcome while fetching air quality
/// readings from the MOENV open data platform
///
/// Moenv - error while communicating with the platform
/// Document - error while deserializing a dataset document
#[derive(Debug)]
pub enum MoenvError {
    Moenv(String),
    Document(String),
}

impl fmt::Display for MoenvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoenvError::Moenv(e) => write!(f, "MoenvError::Moenv: {}", e),
            MoenvError::Document(e) => write!(f, "MoenvError::Document: {}", e),
        }
    }
}

impl From<reqwest::Error> for MoenvError {
    fn from(e: reqwest::Error) -> Self {
        MoenvError::Moenv(e.to_string())
    }
}

impl From<serde_json::Error> for MoenvError {
    fn from(e: serde_json::Error) -> Self {
        MoenvError::Document(e.to_string())
    }
}
