use serde::Deserialize;

/// One page of air quality readings from the MOENV open data platform
#[derive(Deserialize)]
pub struct AqiDocument {
    pub records: Vec<StationReading>,
}

/// Latest measurement of one air quality monitoring station
#[derive(Clone, Deserialize)]
pub struct StationReading {
    #[serde(rename = "sitename")]
    pub site_name: String,
    pub county: String,
    pub aqi: String,
}
