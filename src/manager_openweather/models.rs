use serde::Deserialize;
use serde_with::{serde_as, TimestampSeconds};
use chrono::{DateTime, Utc};

#[derive(Deserialize)]
pub struct MainValues {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: u32,
    pub humidity: u8,
}

#[derive(Deserialize)]
pub struct Wind {
    pub speed: f64,
}

#[derive(Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon: String,
}

#[derive(Deserialize)]
pub struct FullCurrent {
    pub main: MainValues,
    pub wind: Wind,
    pub weather: Vec<Condition>,
}

#[serde_as]
#[derive(Deserialize)]
pub struct FullForecastItem {
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub dt: DateTime<Utc>,
    pub main: MainValues,
    pub weather: Vec<Condition>,
}

#[derive(Deserialize)]
pub struct FullForecast {
    pub list: Vec<FullForecastItem>,
}

/// Error body returned by OpenWeather together with a non success status,
/// e.g. `{"cod":"404","message":"city not found"}`
#[derive(Deserialize)]
pub struct ApiError {
    pub message: Option<String>,
}

/// Weather right now, temperatures in Celsius
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub pressure: u32,
    pub wind_speed: f64,
    pub description: String,
    pub icon: String,
    pub icon_url: String,
}

/// One forecasted interval, temperatures in Celsius
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    pub timestamp: DateTime<Utc>,
    pub temperature: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: u32,
    pub humidity: u8,
    pub description: String,
}
