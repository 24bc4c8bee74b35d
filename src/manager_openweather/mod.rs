pub mod errors;
mod models;

use log::debug;
use reqwest::Client;
use crate::initialization::OpenWeatherConfig;
use crate::manager_openweather::errors::WeatherError;
use crate::manager_openweather::models::{ApiError, Condition, FullCurrent, FullForecast};

pub use crate::manager_openweather::models::{CurrentConditions, ForecastEntry};

const UNITS: &str = "metric";

/// Struct for fetching current weather and forecasts from OpenWeather
pub struct OpenWeather {
    client: Client,
    api_key: String,
    base_url: String,
    icon_base_url: String,
}

impl OpenWeather {
    /// Returns an OpenWeather struct ready for fetching weather data
    ///
    /// # Arguments
    ///
    /// * 'config' - API key and base urls to use for every request
    pub fn new(config: &OpenWeatherConfig) -> Result<OpenWeather, WeatherError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            icon_base_url: config.icon_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Retrieves current weather for the given city, temperatures in Celsius.
    /// Which city is picked when the name is ambiguous is up to OpenWeather.
    ///
    /// # Arguments
    ///
    /// * 'city' - name of the city
    pub async fn fetch_current(&self, city: &str) -> Result<CurrentConditions, WeatherError> {
        let json = self.get("weather", city).await?;
        let current: FullCurrent = serde_json::from_str(&json)?;
        let condition = first_condition(current.weather)?;

        Ok(CurrentConditions {
            temperature: current.main.temp,
            feels_like: current.main.feels_like,
            humidity: current.main.humidity,
            pressure: current.main.pressure,
            wind_speed: current.wind.speed,
            icon_url: format!("{}/{}@2x.png", self.icon_base_url, condition.icon),
            description: condition.description,
            icon: condition.icon,
        })
    }

    /// Retrieves the 5 day forecast in 3 hour intervals for the given city.
    /// Entries are returned in the order OpenWeather sends them, i.e. chronologically.
    ///
    /// # Arguments
    ///
    /// * 'city' - name of the city
    pub async fn fetch_forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, WeatherError> {
        let json = self.get("forecast", city).await?;
        let full_forecast: FullForecast = serde_json::from_str(&json)?;

        let mut forecast: Vec<ForecastEntry> = Vec::with_capacity(full_forecast.list.len());
        for item in full_forecast.list {
            let condition = first_condition(item.weather)?;
            forecast.push(ForecastEntry {
                timestamp: item.dt,
                temperature: item.main.temp,
                feels_like: item.main.feels_like,
                temp_min: item.main.temp_min,
                temp_max: item.main.temp_max,
                pressure: item.main.pressure,
                humidity: item.main.humidity,
                description: condition.description,
            });
        }

        Ok(forecast)
    }

    /// Makes one GET request against the given endpoint and returns the body
    ///
    /// # Arguments
    ///
    /// * 'endpoint' - path below the base url, 'weather' or 'forecast'
    /// * 'city' - name of the city
    async fn get(&self, endpoint: &str, city: &str) -> Result<String, WeatherError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("requesting {} for '{}'", url, city);

        let req = self.client
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", UNITS)])
            .send().await?;

        let status = req.status();
        let body = req.text().await?;

        if !status.is_success() {
            let reason = serde_json::from_str::<ApiError>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_default();
            return Err(WeatherError::OpenWeather(
                format!("error while fetching {} for '{}': {} {}", endpoint, city, status, reason)
            ));
        }

        Ok(body)
    }
}

fn first_condition(conditions: Vec<Condition>) -> Result<Condition, WeatherError> {
    conditions
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::Document("no weather condition in response".to_string()))
}
