use std::fmt;

#[derive(Debug)]
pub enum WeatherError {
    OpenWeather(String),
    Document(String),
}

impl fmt::Display for WeatherError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WeatherError::OpenWeather(e) => write!(f, "WeatherError::OpenWeather: {}", e),
            WeatherError::Document(e) => write!(f, "WeatherError::Document: {}", e),
        }
    }
}
impl From<reqwest::Error> for WeatherError {
    fn from(e: reqwest::Error) -> Self {
        WeatherError::OpenWeather(e.without_url().to_string())
    }
}
impl From<serde_json::Error> for WeatherError {
    fn from(e: serde_json::Error) -> Self {
        WeatherError::Document(e.to_string())
    }
}
