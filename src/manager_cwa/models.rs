use serde::Deserialize;

#[derive(Deserialize)]
pub struct ForecastDocument {
    pub records: Records,
}

#[derive(Deserialize)]
pub struct Records {
    #[serde(rename = "datasetDescription")]
    pub dataset_description: String,
    pub location: Vec<Location>,
}

#[derive(Deserialize)]
pub struct Location {
    #[serde(rename = "locationName")]
    pub location_name: String,
    #[serde(rename = "weatherElement")]
    pub weather_element: Vec<WeatherElement>,
}

#[derive(Deserialize)]
pub struct WeatherElement {
    #[serde(rename = "elementName")]
    pub element_name: String,
    pub time: Vec<TimeEntry>,
}

#[derive(Deserialize)]
pub struct TimeEntry {
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
    pub parameter: Parameter,
}

#[derive(Deserialize)]
pub struct Parameter {
    #[serde(rename = "parameterName")]
    pub parameter_name: String,
}

/// Forecast for a single location together with the dataset description
/// the provider attached to it
pub struct LocationForecast {
    pub dataset_description: String,
    pub location: Location,
}
