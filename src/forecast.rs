use std::fmt;
use crate::manager_cwa::models::{LocationForecast, WeatherElement};
use crate::manager_moenv::models::StationReading;
use crate::models::{ForecastInterval, WeatherReport};

const PREFERRED_SITE: &str = "前金";
const AQI_UNAVAILABLE: &str = "N/A";

/// Error representing a forecast document that cannot be assembled into
/// a report
///
/// NoElements - the forecast carries no weather elements at all
/// Misaligned - the weather elements disagree on the time intervals
#[derive(Debug)]
pub enum ForecastError {
    NoElements,
    Misaligned(String),
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastError::NoElements => write!(f, "ForecastError::NoElements: forecast contains no weather elements"),
            ForecastError::Misaligned(e) => write!(f, "ForecastError::Misaligned: {}", e),
        }
    }
}

/// Assembles the aggregated weather report from a location forecast and the
/// latest air quality readings.
///
/// Every weather element contributes one attribute per time interval. The
/// air quality index comes from the preferred station in the forecast
/// location's county, or the first station of that county when the preferred
/// one is absent, and is repeated on every interval since the readings are
/// a current snapshot rather than a forecast.
///
/// # Arguments
///
/// * 'forecast' - forecast for a single location
/// * 'readings' - latest air quality readings, possibly empty
pub fn assemble_report(forecast: LocationForecast, readings: &[StationReading]) -> Result<WeatherReport, ForecastError> {
    let LocationForecast { dataset_description, location } = forecast;

    validate_alignment(&location.weather_element)?;

    let air_quality = resolve_air_quality(&location.location_name, readings);

    // The first element's time series is the reference, validated above
    let mut forecasts: Vec<ForecastInterval> = location.weather_element[0].time
        .iter()
        .map(|entry| ForecastInterval {
            start_time: entry.start_time.clone(),
            end_time: entry.end_time.clone(),
            air_quality: air_quality.clone(),
            ..Default::default()
        })
        .collect();

    for element in &location.weather_element {
        for (interval, entry) in forecasts.iter_mut().zip(element.time.iter()) {
            apply_parameter(interval, &element.element_name, &entry.parameter.parameter_name);
        }
    }

    Ok(WeatherReport {
        city: location.location_name,
        update_time: dataset_description,
        forecasts,
    })
}

/// Checks that every weather element reports the same time intervals as the
/// first one, in number as well as in boundaries
///
/// # Arguments
///
/// * 'elements' - weather elements of a location forecast
fn validate_alignment(elements: &[WeatherElement]) -> Result<(), ForecastError> {
    let reference = elements.first().ok_or(ForecastError::NoElements)?;

    for element in &elements[1..] {
        if element.time.len() != reference.time.len() {
            return Err(ForecastError::Misaligned(format!(
                "element {} has {} time entries, expected {}",
                element.element_name, element.time.len(), reference.time.len(),
            )));
        }

        for (entry, expected) in element.time.iter().zip(reference.time.iter()) {
            if entry.start_time != expected.start_time || entry.end_time != expected.end_time {
                return Err(ForecastError::Misaligned(format!(
                    "element {} disagrees on the interval starting {}",
                    element.element_name, expected.start_time,
                )));
            }
        }
    }

    Ok(())
}

/// Picks the air quality index to report for a county, or the unavailable
/// sentinel when no station in the county has a non empty index
///
/// # Arguments
///
/// * 'county' - county to pick a station from
/// * 'readings' - latest air quality readings
fn resolve_air_quality(county: &str, readings: &[StationReading]) -> String {
    let in_county: Vec<&StationReading> = readings.iter()
        .filter(|reading| reading.county == county)
        .collect();

    let selected = in_county.iter()
        .find(|reading| reading.site_name == PREFERRED_SITE)
        .or_else(|| in_county.first());

    match selected {
        Some(reading) if !reading.aqi.is_empty() => reading.aqi.clone(),
        _ => AQI_UNAVAILABLE.to_string(),
    }
}

/// Writes one weather element value into its interval attribute, with the
/// display unit the attribute carries. Unknown element kinds are left out
/// of the report.
///
/// # Arguments
///
/// * 'interval' - interval to update
/// * 'element_name' - provider name of the weather element kind
/// * 'value' - the element value for this interval
fn apply_parameter(interval: &mut ForecastInterval, element_name: &str, value: &str) {
    match element_name {
        "Wx" => interval.weather = value.to_string(),
        "PoP" => interval.rain = format!("{}%", value),
        "MinT" => interval.min_temp = format!("{}°C", value),
        "MaxT" => interval.max_temp = format!("{}°C", value),
        "CI" => interval.comfort = value.to_string(),
        "WS" => interval.wind_speed = value.to_string(),
        "RH" => interval.humidity = format!("{}%", value),
        _ => (),
    }
}
