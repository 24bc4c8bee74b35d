use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::Serialize;
use crate::manager_openweather::ForecastEntry;

/// One point in a chart series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataItem<T> {
    pub x: DateTime<Local>,
    pub y: T,
}

/// Forecast entries in the order they were received, ready for charting
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastTable {
    entries: Vec<ForecastEntry>,
}

impl ForecastTable {
    pub fn entries(&self) -> &[ForecastEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns one column of the table as a chart series with local time on the x axis
    ///
    /// # Arguments
    ///
    /// * 'value' - picks the y value from each entry
    pub fn series<F>(&self, value: F) -> Vec<DataItem<f64>>
    where
        F: Fn(&ForecastEntry) -> f64,
    {
        self.entries
            .iter()
            .map(|e| DataItem { x: e.timestamp.with_timezone(&Local), y: value(e) })
            .collect()
    }
}

/// Wraps forecast entries in a table without filtering, sorting or deduplicating them
///
/// # Arguments
///
/// * 'entries' - forecast entries as returned by OpenWeather
pub fn shape(entries: Vec<ForecastEntry>) -> ForecastTable {
    ForecastTable { entries }
}

/// Counts how many entries share each description over the whole forecast window.
/// Descriptions are compared as is (case-sensitive) and keep the order of their
/// first occurrence.
///
/// # Arguments
///
/// * 'table' - the forecast table to count
pub fn count_by_description(table: &ForecastTable) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for entry in table.entries() {
        *counts.entry(entry.description.clone()).or_insert(0) += 1;
    }

    counts
}
