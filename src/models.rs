use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// One forecast time window with its display formatted weather attributes
#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastInterval {
    pub start_time: String,
    pub end_time: String,
    pub weather: String,
    pub rain: String,
    pub min_temp: String,
    pub max_temp: String,
    pub comfort: String,
    pub wind_speed: String,
    pub humidity: String,
    pub air_quality: String,
}

/// The aggregated report returned by the weather endpoint, intervals in
/// chronological order
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub city: String,
    pub update_time: String,
    pub forecasts: Vec<ForecastInterval>,
}

#[derive(Serialize)]
pub struct WeatherResponse {
    pub success: bool,
    pub data: WeatherReport,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct ServiceDescriptor {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: EndpointList,
}

#[derive(Serialize)]
pub struct EndpointList {
    pub health: &'static str,
    pub weather: &'static str,
}

/// Uniform body for all non-success responses
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorBody {
    /// Returns an error body carrying just the error caption
    ///
    /// # Arguments
    ///
    /// * 'error' - the error caption
    pub fn new(error: &str) -> ErrorBody {
        ErrorBody { error: error.to_string(), message: None, details: None }
    }

    /// Returns an error body with a caption and a human readable message
    ///
    /// # Arguments
    ///
    /// * 'error' - the error caption
    /// * 'message' - what went wrong
    pub fn with_message(error: &str, message: &str) -> ErrorBody {
        ErrorBody { error: error.to_string(), message: Some(message.to_string()), details: None }
    }
}
