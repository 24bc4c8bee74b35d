//! Shared fixtures for tests running against a mocked OpenWeather server

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use crate::initialization::OpenWeatherConfig;
use crate::manager_openweather::OpenWeather;

pub const API_KEY: &str = "test-key";
pub const ICON_BASE_URL: &str = "http://icons.test/img/wn";
pub const FIRST_DT: i64 = 1_700_000_000;

pub fn test_config(server: &MockServer) -> OpenWeatherConfig {
    OpenWeatherConfig {
        api_key: API_KEY.to_string(),
        base_url: server.uri(),
        icon_base_url: ICON_BASE_URL.to_string(),
    }
}

pub fn test_client(server: &MockServer) -> OpenWeather {
    OpenWeather::new(&test_config(server)).unwrap()
}

/// Current weather body for Ottawa with light rain
pub fn current_body() -> Value {
    json!({
        "coord": {"lon": -75.6981, "lat": 45.4112},
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "base": "stations",
        "main": {
            "temp": 5.2,
            "feels_like": 2.1,
            "temp_min": 4.0,
            "temp_max": 6.3,
            "pressure": 1013,
            "humidity": 80
        },
        "visibility": 10000,
        "wind": {"speed": 4.1, "deg": 250},
        "dt": FIRST_DT,
        "name": "Ottawa",
        "cod": 200
    })
}

/// Forecast body with one 3 hour interval per given description
pub fn forecast_body(descriptions: &[&str]) -> Value {
    let list: Vec<Value> = descriptions
        .iter()
        .enumerate()
        .map(|(i, description)| {
            let temp = 3.0 + i as f64;
            json!({
                "dt": FIRST_DT + i as i64 * 10800,
                "main": {
                    "temp": temp,
                    "feels_like": temp - 2.5,
                    "temp_min": temp - 1.0,
                    "temp_max": temp + 1.0,
                    "pressure": 1010 + i,
                    "humidity": 70 + i
                },
                "weather": [{"id": 800, "main": "Clear", "description": description, "icon": "01d"}],
                "dt_txt": "2023-11-14 22:00:00"
            })
        })
        .collect();

    json!({"cod": "200", "message": 0, "cnt": list.len(), "list": list})
}

/// Five times clear sky followed by three times light rain
pub fn mixed_descriptions() -> Vec<&'static str> {
    let mut descriptions = vec!["clear sky"; 5];
    descriptions.extend(vec!["light rain"; 3]);
    descriptions
}

pub async fn mount(server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/{}", endpoint)))
        .respond_with(response)
        .mount(server)
        .await;
}

pub fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({"cod": "404", "message": "city not found"}))
}
