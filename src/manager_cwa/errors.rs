use std::fmt;
use serde_json::Value;

#[derive(Debug)]
pub enum CwaError {
    Request(String),
    Api { status: u16, details: Option<Value> },
    Document(String),
    NoLocation(String),
}

impl fmt::Display for CwaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CwaError::Request(e) => write!(f, "CwaError::Request: {}", e),
            CwaError::Api { status, .. } => {
                write!(f, "CwaError::Api: provider responded with status {}", status)
            }
            CwaError::Document(e) => write!(f, "CwaError::Document: {}", e),
            CwaError::NoLocation(name) => {
                write!(f, "CwaError::NoLocation: no forecast data for {}", name)
            }
        }
    }
}
impl From<reqwest::Error> for CwaError {
    fn from(e: reqwest::Error) -> Self {
        CwaError::Request(e.to_string())
    }
}
impl From<serde_json::Error> for CwaError {
    fn from(e: serde_json::Error) -> Self {
        CwaError::Document(e.to_string())
    }
}
