use actix_web::{get, web, HttpResponse, Responder};
use log::info;
use serde::Deserialize;
use crate::AppState;
use crate::presentation::run_dashboard;

const INDEX_PAGE: &str = include_str!("../static/index.html");

#[derive(Deserialize, Debug)]
struct CityParams {
    #[serde(default)]
    city: String,
}

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_PAGE)
}

/// Called by the page every time the city input changes
#[get("/dashboard")]
async fn dashboard(params: web::Query<CityParams>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    let view = run_dashboard(&data.weather, &params.city).await;

    HttpResponse::Ok().json(view)
}
