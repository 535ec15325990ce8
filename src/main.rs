mod errors;
mod logging;
mod initialization;
mod models;
mod handlers;
mod forecast;
mod manager_cwa;
mod manager_moenv;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::info;
use crate::errors::UnrecoverableError;
use crate::initialization::config;
use crate::manager_cwa::Cwa;
use crate::manager_moenv::Moenv;

/// The one location this service reports weather for
const LOCATION_NAME: &str = "高雄市";

struct AppState {
    cwa: Option<Cwa>,
    moenv: Option<Moenv>,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;
    logging::setup_logger(&config.general)?;

    info!("kaoweather {} starting", env!("CARGO_PKG_VERSION"));

    let cwa = match config.providers.cwa_api_key {
        Some(key) => Some(Cwa::new(&key)?),
        None => {
            info!("CWA_API_KEY is not set, weather requests will fail until it is configured");
            None
        },
    };

    let moenv = match config.providers.moenv_api_key {
        Some(key) => Some(Moenv::new(&key)?),
        None => {
            info!("MOENV_API_KEY is not set, air quality enrichment is disabled");
            None
        },
    };

    info!("listening on {}:{}", config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(web::Data::new(AppState { cwa: cwa.clone(), moenv: moenv.clone() }))
            .service(handlers::index)
            .service(handlers::health)
            .service(handlers::kaohsiung_weather)
            .default_service(web::route().to(handlers::not_found))
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
