pub mod errors;
pub mod models;

use std::time::Duration;
use reqwest::Client;
use serde_json::Value;
use crate::manager_cwa::errors::CwaError;
use crate::manager_cwa::models::{ForecastDocument, LocationForecast};

const CWA_DOMAIN: &str = "https://opendata.cwa.gov.tw";
const FORECAST_36H_PATH: &str = "/api/v1/rest/datastore/F-C0032-001";

/// Struct for managing 36 hour weather forecasts produced by the CWA
/// open data platform
#[derive(Clone)]
pub struct Cwa {
    client: Client,
    api_key: String,
}

impl Cwa {
    /// Returns a Cwa struct ready for fetching and processing forecasts
    /// from the CWA open data platform
    ///
    /// # Arguments
    ///
    /// * 'api_key' - authorization key issued by the CWA open data platform
    pub fn new(api_key: &str) -> Result<Cwa, CwaError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
        })
    }

    /// Retrieves the 36 hour forecast for the given location.
    ///
    /// The raw document may hold several locations, but the returned forecast
    /// only includes the first one, i.e. the location asked for, together with
    /// the dataset description used as the report update time.
    ///
    /// # Arguments
    ///
    /// * 'location_name' - name of the location to get a forecast for
    pub async fn new_forecast(&self, location_name: &str) -> Result<LocationForecast, CwaError> {
        let url = format!("{}{}", CWA_DOMAIN, FORECAST_36H_PATH);

        let res = self.client
            .get(url)
            .query(&[("Authorization", self.api_key.as_str()), ("locationName", location_name)])
            .send().await?;

        let status = res.status();
        let json = res.text().await?;

        if !status.is_success() {
            let details = serde_json::from_str::<Value>(&json).ok();
            return Err(CwaError::Api { status: status.as_u16(), details });
        }

        parse_document(&json, location_name)
    }
}

/// Extracts the forecast of the first location from a raw dataset document
///
/// # Arguments
///
/// * 'json' - the raw dataset document
/// * 'location_name' - the location the document was requested for
fn parse_document(json: &str, location_name: &str) -> Result<LocationForecast, CwaError> {
    let document: ForecastDocument = serde_json::from_str(json)?;

    let location = document.records.location
        .into_iter()
        .next()
        .ok_or_else(|| CwaError::NoLocation(location_name.to_string()))?;

    Ok(LocationForecast {
        dataset_description: document.records.dataset_description,
        location,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORECAST_DOCUMENT: &str = r#"{
        "success": "true",
        "records": {
            "datasetDescription": "三十六小時天氣預報",
            "location": [
                {
                    "locationName": "高雄市",
                    "weatherElement": [
                        {
                            "elementName": "Wx",
                            "time": [
                                {
                                    "startTime": "2026-08-25 18:00:00",
                                    "endTime": "2026-08-26 06:00:00",
                                    "parameter": { "parameterName": "晴時多雲", "parameterValue": "2" }
                                },
                                {
                                    "startTime": "2026-08-26 06:00:00",
                                    "endTime": "2026-08-26 18:00:00",
                                    "parameter": { "parameterName": "多雲時晴", "parameterValue": "3" }
                                }
                            ]
                        },
                        {
                            "elementName": "PoP",
                            "time": [
                                {
                                    "startTime": "2026-08-25 18:00:00",
                                    "endTime": "2026-08-26 06:00:00",
                                    "parameter": { "parameterName": "20", "parameterUnit": "百分比" }
                                },
                                {
                                    "startTime": "2026-08-26 06:00:00",
                                    "endTime": "2026-08-26 18:00:00",
                                    "parameter": { "parameterName": "30", "parameterUnit": "百分比" }
                                }
                            ]
                        },
                        {
                            "elementName": "MinT",
                            "time": [
                                {
                                    "startTime": "2026-08-25 18:00:00",
                                    "endTime": "2026-08-26 06:00:00",
                                    "parameter": { "parameterName": "26", "parameterUnit": "C" }
                                },
                                {
                                    "startTime": "2026-08-26 06:00:00",
                                    "endTime": "2026-08-26 18:00:00",
                                    "parameter": { "parameterName": "27", "parameterUnit": "C" }
                                }
                            ]
                        }
                    ]
                }
            ]
        }
    }"#;

    #[test]
    fn parses_the_first_location_of_a_dataset_document() {
        let forecast = parse_document(FORECAST_DOCUMENT, "高雄市").unwrap();

        assert_eq!(forecast.dataset_description, "三十六小時天氣預報");
        assert_eq!(forecast.location.location_name, "高雄市");
        assert_eq!(forecast.location.weather_element.len(), 3);

        let wx = &forecast.location.weather_element[0];
        assert_eq!(wx.element_name, "Wx");
        assert_eq!(wx.time.len(), 2);
        assert_eq!(wx.time[0].start_time, "2026-08-25 18:00:00");
        assert_eq!(wx.time[0].end_time, "2026-08-26 06:00:00");
        assert_eq!(wx.time[0].parameter.parameter_name, "晴時多雲");
        assert_eq!(wx.time[1].parameter.parameter_name, "多雲時晴");
    }

    #[test]
    fn an_empty_location_list_means_no_location() {
        let empty = r#"{
            "records": {
                "datasetDescription": "三十六小時天氣預報",
                "location": []
            }
        }"#;

        assert!(matches!(
            parse_document(empty, "高雄市"),
            Err(CwaError::NoLocation(_))
        ));
    }

    #[test]
    fn a_malformed_document_is_a_document_error() {
        assert!(matches!(
            parse_document("{ not even json", "高雄市"),
            Err(CwaError::Document(_))
        ));
    }
}
