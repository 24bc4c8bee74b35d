mod models;

use log::{error, info};
use crate::manager_forecast::{count_by_description, shape, ForecastTable};
use crate::manager_openweather::{CurrentConditions, OpenWeather};

pub use crate::presentation::models::{
    CurrentPanel, DashboardView, DonutChart, ForecastView, LineChart, MetricTile, Segment, Series,
};

pub const CITY_NOT_FOUND: &str = "City not found. Please check the city name and try again.";
pub const NO_FORECAST: &str = "Unable to retrieve forecast data.";

const X_TITLE: &str = "Date & Time";
const Y_TITLE: &str = "Temperature (°C)";

/// Runs the whole fetch and render sequence for one city.
///
/// Current weather is fetched first and the forecast only if that succeeded. A failing
/// current weather request leaves nothing but an error message, a failing forecast only
/// drops the charts. An empty city renders nothing and makes no requests.
///
/// # Arguments
///
/// * 'weather' - OpenWeather manager
/// * 'city' - city name as entered by the user
pub async fn run_dashboard(weather: &OpenWeather, city: &str) -> DashboardView {
    if city.is_empty() {
        return DashboardView::Empty;
    }

    let current = match weather.fetch_current(city).await {
        Ok(current) => current,
        Err(e) => {
            error!("failed to get current weather for '{}': {}", city, e);
            return DashboardView::Error { message: CITY_NOT_FOUND.to_string() };
        }
    };
    info!("current weather for '{}': {}, {}", city, current.temperature, current.description);

    let forecast = match weather.fetch_forecast(city).await {
        Ok(entries) => {
            let table = shape(entries);
            if table.is_empty() {
                error!("empty forecast for '{}'", city);
                ForecastView::Error { message: NO_FORECAST.to_string() }
            } else {
                info!("forecast for '{}': {} entries", city, table.len());
                forecast_view(&table)
            }
        }
        Err(e) => {
            error!("failed to get forecast for '{}': {}", city, e);
            ForecastView::Error { message: NO_FORECAST.to_string() }
        }
    };

    DashboardView::Ready {
        current: current_panel(&current),
        tiles: metric_tiles(&current),
        forecast,
    }
}

fn current_panel(current: &CurrentConditions) -> CurrentPanel {
    CurrentPanel {
        icon_url: current.icon_url.clone(),
        temperature: format!("{}°C", format_float(current.temperature)),
        description: current.description.clone(),
    }
}

/// Returns the feels like, humidity, wind speed and pressure tiles, in that order
///
/// # Arguments
///
/// * 'current' - current weather
fn metric_tiles(current: &CurrentConditions) -> Vec<MetricTile> {
    vec![
        MetricTile {
            icon: "🌡️",
            value: format!("{}°C", format_float(current.feels_like)),
            label: "Feels Like",
        },
        MetricTile {
            icon: "💧",
            value: format!("{}%", current.humidity),
            label: "Humidity",
        },
        MetricTile {
            icon: "🌬️",
            value: format!("{} m/s", format_float(current.wind_speed)),
            label: "Wind Speed",
        },
        MetricTile {
            icon: "🔽",
            value: format!("{} hPa", current.pressure),
            label: "Pressure",
        },
    ]
}

fn forecast_view(table: &ForecastTable) -> ForecastView {
    let temperature = LineChart {
        title: "📈 Temperature Forecast",
        x_title: X_TITLE,
        y_title: Y_TITLE,
        series: vec![
            Series {
                name: "Temperature",
                color: "firebrick",
                dashed: false,
                markers: true,
                points: table.series(|e| e.temperature),
            },
            Series {
                name: "Feels Like",
                color: "royalblue",
                dashed: true,
                markers: false,
                points: table.series(|e| e.feels_like),
            },
        ],
    };

    let conditions = DonutChart {
        title: "📊 Weather Conditions",
        hole: 0.4,
        segments: count_by_description(table)
            .into_iter()
            .map(|(label, value)| Segment { label, value })
            .collect(),
    };

    let range = LineChart {
        title: "🌡️ Temperature Range",
        x_title: X_TITLE,
        y_title: Y_TITLE,
        series: vec![
            Series {
                name: "Max Temp",
                color: "red",
                dashed: false,
                markers: false,
                points: table.series(|e| e.temp_max),
            },
            Series {
                name: "Min Temp",
                color: "blue",
                dashed: false,
                markers: false,
                points: table.series(|e| e.temp_min),
            },
        ],
    };

    ForecastView::Ready { temperature, conditions, range }
}

/// Formats a float keeping at least one decimal, i.e. 5 is shown as "5.0"
///
/// # Arguments
///
/// * 'value' - value to format
fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
