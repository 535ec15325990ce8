pub mod errors;
pub mod models;

use std::time::Duration;
use reqwest::Client;
use crate::manager_moenv::errors::MoenvError;
use crate::manager_moenv::models::{AqiDocument, StationReading};

const MOENV_DOMAIN: &str = "https://data.moenv.gov.tw";
const AQI_PATH: &str = "/api/v2/aqx_p_488";
const PAGE_SIZE: &str = "1000";

/// Struct for managing air quality index readings from the MOENV
/// open data platform
#[derive(Clone)]
pub struct Moenv {
    client: Client,
    api_key: String,
}

impl Moenv {
    /// Returns a Moenv struct ready for fetching air quality readings
    ///
    /// # Arguments
    ///
    /// * 'api_key' - api key issued by the MOENV open data platform
    pub fn new(api_key: &str) -> Result<Moenv, MoenvError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
        })
    }

    /// Retrieves the latest readings of all air quality monitoring stations,
    /// in the order the platform returns them
    pub async fn latest_readings(&self) -> Result<Vec<StationReading>, MoenvError> {
        let url = format!("{}{}", MOENV_DOMAIN, AQI_PATH);

        let res = self.client
            .get(url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("limit", PAGE_SIZE),
                ("sort", "ImportDate desc"),
                ("format", "JSON"),
            ])
            .send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(MoenvError::Moenv(format!("Error while fetching readings from MOENV: {}", status)));
        }

        let document: AqiDocument = serde_json::from_str(&res.text().await?)?;

        Ok(document.records)
    }
}
