use serde::Serialize;
use crate::manager_forecast::DataItem;

/// Everything the dashboard page renders for one city
#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DashboardView {
    Empty,
    Error {
        message: String,
    },
    Ready {
        current: CurrentPanel,
        tiles: Vec<MetricTile>,
        forecast: ForecastView,
    },
}

#[derive(Debug, PartialEq, Serialize)]
pub struct CurrentPanel {
    pub icon_url: String,
    pub temperature: String,
    pub description: String,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct MetricTile {
    pub icon: &'static str,
    pub value: String,
    pub label: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ForecastView {
    Error {
        message: String,
    },
    Ready {
        temperature: LineChart,
        conditions: DonutChart,
        range: LineChart,
    },
}

#[derive(Debug, PartialEq, Serialize)]
pub struct LineChart {
    pub title: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub series: Vec<Series>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Series {
    pub name: &'static str,
    pub color: &'static str,
    pub dashed: bool,
    pub markers: bool,
    pub points: Vec<DataItem<f64>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct DonutChart {
    pub title: &'static str,
    pub hole: f64,
    pub segments: Vec<Segment>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Segment {
    pub label: String,
    pub value: usize,
}
