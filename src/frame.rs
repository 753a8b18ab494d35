//! In-memory tables for station time series.
//!
//! Missing values are `None` throughout; cleaning nulls values, it never
//! drops rows.

use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, Utc};

/// A named measurement column with per-row missing values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl Column {
    pub fn new(name: &str) -> Self {
        Column {
            name: name.to_string(),
            values: Vec::new(),
        }
    }
}

/// One station's raw pulled table for one variable group: UTC timestamps
/// plus the measurement columns the fetch requested.
#[derive(Debug, Clone)]
pub struct SeriesFrame {
    pub station: String,
    pub times: Vec<DateTime<Utc>>,
    pub columns: Vec<Column>,
}

impl SeriesFrame {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    /// Renames the measurement columns positionally to the canonical clean
    /// names. The name count must match the column count exactly.
    pub fn rename_columns(mut self, names: &[&str]) -> Result<Self> {
        if names.len() != self.columns.len() {
            return Err(anyhow!(
                "expected {} clean column names, frame has {} measurement columns",
                names.len(),
                self.columns.len()
            ));
        }

        for (column, name) in self.columns.iter_mut().zip(names) {
            column.name = (*name).to_string();
        }

        Ok(self)
    }
}

/// A cleaned series resampled onto a gap-free daily axis. Days without an
/// observation carry `None` in every measurement column.
#[derive(Debug, Clone)]
pub struct DailyFrame {
    pub station: String,
    pub dates: Vec<NaiveDate>,
    pub columns: Vec<Column>,
}

impl DailyFrame {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Daily frames of one measurement group concatenated across stations; the
/// station label becomes a per-row column.
#[derive(Debug, Clone)]
pub struct CombinedFrame {
    pub dates: Vec<NaiveDate>,
    pub stations: Vec<String>,
    pub columns: Vec<Column>,
}

impl CombinedFrame {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Stacks per-station daily frames in the order given. Every frame must
    /// carry the same measurement columns.
    pub fn concat(frames: &[DailyFrame]) -> Result<CombinedFrame> {
        let first = frames
            .first()
            .ok_or_else(|| anyhow!("no frames to concatenate"))?;

        let names: Vec<String> = first.columns.iter().map(|c| c.name.clone()).collect();

        let mut combined = CombinedFrame {
            dates: Vec::new(),
            stations: Vec::new(),
            columns: names.iter().map(|n| Column::new(n)).collect(),
        };

        for frame in frames {
            let frame_names: Vec<&str> = frame.columns.iter().map(|c| c.name.as_str()).collect();
            if frame_names != names {
                return Err(anyhow!(
                    "frame for `{}` has columns {:?}, expected {:?}",
                    frame.station,
                    frame_names,
                    names
                ));
            }

            combined.dates.extend(frame.dates.iter().copied());
            combined
                .stations
                .extend(frame.dates.iter().map(|_| frame.station.clone()));
            for (target, source) in combined.columns.iter_mut().zip(&frame.columns) {
                target.values.extend(source.values.iter().copied());
            }
        }

        Ok(combined)
    }
}

// -- Tests -------------------------------------------------------------------
