use actix_web::{get, http::StatusCode, web, HttpResponse, Responder};
use chrono::Utc;
use log::{error, info, warn};
use crate::{AppState, LOCATION_NAME};
use crate::forecast::assemble_report;
use crate::manager_cwa::errors::CwaError;
use crate::models::{EndpointList, ErrorBody, HealthResponse, ServiceDescriptor, WeatherResponse};

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(ServiceDescriptor {
        service: "Kaohsiung weather API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: EndpointList {
            health: "/api/health",
            weather: "/api/weather/kaohsiung",
        },
    })
}

#[get("/api/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK",
        timestamp: Utc::now(),
    })
}

#[get("/api/weather/kaohsiung")]
pub async fn kaohsiung_weather(data: web::Data<AppState>) -> impl Responder {
    info!("assembling weather report for {}", LOCATION_NAME);

    let cwa = match data.cwa.as_ref() {
        Some(cwa) => cwa,
        None => {
            error!("weather request rejected, CWA_API_KEY is not set");
            return HttpResponse::InternalServerError()
                .json(ErrorBody::with_message("Configuration error", "CWA_API_KEY is not set"));
        },
    };

    // An unavailable air quality service degrades the report to N/A rather
    // than failing the request
    let air_quality = async {
        match data.moenv.as_ref() {
            Some(moenv) => match moenv.latest_readings().await {
                Ok(readings) => readings,
                Err(e) => {
                    warn!("air quality readings unavailable: {}", e);
                    Vec::new()
                },
            },
            None => Vec::new(),
        }
    };

    let (forecast, readings) = tokio::join!(cwa.new_forecast(LOCATION_NAME), air_quality);

    match forecast {
        Ok(forecast) => match assemble_report(forecast, &readings) {
            Ok(report) => HttpResponse::Ok().json(WeatherResponse { success: true, data: report }),
            Err(e) => {
                error!("failed to assemble weather report: {}", e);
                HttpResponse::InternalServerError()
                    .json(ErrorBody::with_message("Internal server error", "failed to assemble weather report"))
            },
        },
        Err(CwaError::NoLocation(name)) => {
            warn!("no forecast data for {}", name);
            HttpResponse::NotFound()
                .json(ErrorBody::with_message("Not found", &format!("no forecast data for {}", name)))
        },
        Err(CwaError::Api { status, details }) => {
            error!("CWA responded with status {}", status);
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            HttpResponse::build(status).json(ErrorBody {
                error: "Upstream weather provider error".to_string(),
                message: Some(format!("provider responded with status {}", status.as_u16())),
                details,
            })
        },
        Err(e) => {
            error!("failed to fetch weather forecast: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorBody::with_message("Internal server error", "failed to fetch weather forecast"))
        },
    }
}

/// Handler for any route outside the service surface
pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ErrorBody::new("Route not found"))
}
