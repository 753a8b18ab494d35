//! Outlier suppression and daily resampling.
//!
//! Both routines are pure: they consume a frame and return the derived
//! frame. Row count is never reduced — outliers are nulled in place, and
//! resampling only ever adds gap rows.

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::frame::{Column, DailyFrame, SeriesFrame};

/// Nulls every value in `column` that lies `threshold` or more sample
/// standard deviations from the column mean (inclusive bounds). Mean and
/// deviation ignore values that are already missing. Single pass — the
/// statistics are computed once, not re-derived after masking.
///
/// With fewer than two observed values the deviation is undefined and the
/// frame comes back unchanged. A zero-variance column degenerates to
/// masking every value equal to the mean.
pub fn suppress_outliers(
    mut frame: SeriesFrame,
    column: &str,
    threshold: f64,
) -> Result<SeriesFrame> {
    let target = frame
        .column_mut(column)
        .ok_or_else(|| anyhow!("no column `{}` in frame", column))?;

    let observed: Vec<f64> = target.values.iter().filter_map(|v| *v).collect();
    if observed.len() < 2 {
        return Ok(frame);
    }

    let mean = observed.iter().sum::<f64>() / observed.len() as f64;
    let variance = observed.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
        / (observed.len() - 1) as f64;
    let std = variance.sqrt();

    let lower = mean - threshold * std;
    let upper = mean + threshold * std;

    for value in target.values.iter_mut() {
        if let Some(v) = *value {
            if v <= lower || v >= upper {
                *value = None;
            }
        }
    }

    Ok(frame)
}

/// Resamples a series onto a gap-free daily axis spanning the frame's own
/// observed min-to-max date range. Timestamps land on their UTC calendar
/// date; days with no observation carry `None` in every measurement
/// column. At most one observation per day is the expected cadence — if a
/// day repeats, the first row seen wins.
pub fn summarize_daily(frame: SeriesFrame) -> DailyFrame {
    let days: Vec<NaiveDate> = frame.times.iter().map(|t| t.date_naive()).collect();

    let mut columns: Vec<Column> = frame.columns.iter().map(|c| Column::new(&c.name)).collect();

    let Some(first) = days.iter().min().copied() else {
        return DailyFrame {
            station: frame.station,
            dates: Vec::new(),
            columns,
        };
    };
    let last = days.iter().max().copied().unwrap();

    let mut row_for_day: HashMap<NaiveDate, usize> = HashMap::new();
    for (row, day) in days.iter().enumerate() {
        row_for_day.entry(*day).or_insert(row);
    }

    let mut dates = Vec::new();
    let mut day = first;
    while day <= last {
        dates.push(day);
        let row = row_for_day.get(&day).copied();
        for (target, source) in columns.iter_mut().zip(&frame.columns) {
            target.values.push(row.and_then(|r| source.values[r]));
        }
        day = day.succ_opt().unwrap();
    }

    DailyFrame {
        station: frame.station,
        dates,
        columns,
    }
}

// -- Tests -------------------------------------------------------------------
