//! Outer-join the combined datasets and reshape wide to long.

use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::frame::{Column, CombinedFrame};

/// Identifier columns carried whole into the long form.
const ID_VAR: &str = "chl";

/// Measurement columns stacked into (measurement, value) rows, in melt order.
const VALUE_VARS: [&str; 3] = ["sst", "light", "no3"];

/// The long-form dataset: one row per (date, station, measurement), with
/// chlorophyll riding along as a constant companion value.
#[derive(Debug, Clone)]
pub struct LongFormFrame {
    pub dates: Vec<NaiveDate>,
    pub stations: Vec<String>,
    pub chl: Vec<Option<f64>>,
    pub measurements: Vec<String>,
    pub values: Vec<Option<f64>>,
}

impl LongFormFrame {
    pub fn len(&self) -> usize {
        self.dates.len()
    }
}

/// Outer-joins two combined frames on (date, station). A row exists in the
/// output if either input has data for that key; the non-contributing
/// side's measurement columns are null. Output rows are sorted by
/// (date, station). Measurement column names must be disjoint across the
/// inputs — a collision means the groups were misconfigured.
pub fn outer_merge(left: &CombinedFrame, right: &CombinedFrame) -> Result<CombinedFrame> {
    for column in &right.columns {
        if left.column(&column.name).is_some() {
            return Err(anyhow!(
                "column `{}` appears in both merge inputs",
                column.name
            ));
        }
    }

    // key -> (left row, right row); BTreeMap gives the sorted key order
    let mut keys: BTreeMap<(NaiveDate, String), (Option<usize>, Option<usize>)> = BTreeMap::new();
    for (row, (date, station)) in left.dates.iter().zip(&left.stations).enumerate() {
        let slot = keys.entry((*date, station.clone())).or_insert((None, None));
        slot.0.get_or_insert(row);
    }
    for (row, (date, station)) in right.dates.iter().zip(&right.stations).enumerate() {
        let slot = keys.entry((*date, station.clone())).or_insert((None, None));
        slot.1.get_or_insert(row);
    }

    let mut merged = CombinedFrame {
        dates: Vec::with_capacity(keys.len()),
        stations: Vec::with_capacity(keys.len()),
        columns: left
            .columns
            .iter()
            .chain(&right.columns)
            .map(|c| Column::new(&c.name))
            .collect(),
    };

    let split = left.columns.len();
    for ((date, station), (left_row, right_row)) in &keys {
        merged.dates.push(*date);
        merged.stations.push(station.clone());
        for (slot, column) in left.columns.iter().enumerate() {
            merged.columns[slot]
                .values
                .push(left_row.and_then(|r| column.values[r]));
        }
        for (slot, column) in right.columns.iter().enumerate() {
            merged.columns[split + slot]
                .values
                .push(right_row.and_then(|r| column.values[r]));
        }
    }

    Ok(merged)
}

/// Melts the wide merged frame into long form: identifiers (date, station,
/// chl) repeat per value variable, and `sst`, `light`, `no3` each become a
/// block of (measurement, value) rows in that order. Wide columns that are
/// neither identifiers nor value variables are dropped.
pub fn wide_to_long(wide: &CombinedFrame) -> Result<LongFormFrame> {
    let chl = wide
        .column(ID_VAR)
        .ok_or_else(|| anyhow!("merged frame has no `{}` column", ID_VAR))?;

    let rows = wide.len();
    let mut long = LongFormFrame {
        dates: Vec::with_capacity(rows * VALUE_VARS.len()),
        stations: Vec::with_capacity(rows * VALUE_VARS.len()),
        chl: Vec::with_capacity(rows * VALUE_VARS.len()),
        measurements: Vec::with_capacity(rows * VALUE_VARS.len()),
        values: Vec::with_capacity(rows * VALUE_VARS.len()),
    };

    for var in VALUE_VARS {
        let column = wide
            .column(var)
            .ok_or_else(|| anyhow!("merged frame has no `{}` column", var))?;

        for row in 0..rows {
            long.dates.push(wide.dates[row]);
            long.stations.push(wide.stations[row].clone());
            long.chl.push(chl.values[row]);
            long.measurements.push(var.to_string());
            long.values.push(column.values[row]);
        }
    }

    Ok(long)
}

// -- Tests -------------------------------------------------------------------
