mod errors;
mod logging;
mod initialization;
mod handlers;
mod manager_openweather;
mod manager_forecast;
mod presentation;
#[cfg(test)]
mod test_support;

use actix_web::{web, App, HttpServer};
use log::info;
use crate::errors::UnrecoverableError;
use crate::initialization::config;
use crate::manager_openweather::OpenWeather;

struct AppState {
    weather: OpenWeather,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;
    let weather = OpenWeather::new(&config.open_weather)?;

    let state = web::Data::new(AppState { weather });

    info!("starting web server on {}:{}", config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(handlers::index)
            .service(handlers::dashboard)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
