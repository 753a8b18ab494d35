//! Fetch, clean and save the three combined datasets.

use anyhow::Result;
use chrono::NaiveDate;

use crate::{erddap::ErddapClient, parquet, pipeline, stations};

use super::make_parquet_file_name;

pub async fn fetch(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Vec<String>> {
    let (start, end) = resolve_window(start, end);

    let client = ErddapClient::new();
    let groups = pipeline::load_combined(&client, start, end).await?;

    let mut saved = Vec::new();
    for (name, frame) in [
        ("chl", &groups.chlorophyll),
        ("nitrate", &groups.nitrate),
        ("light", &groups.light),
    ] {
        let file_path = make_parquet_file_name(name);
        parquet::save_combined(frame, &file_path)?;
        saved.push(file_path.to_string_lossy().to_string());
    }

    Ok(saved)
}

pub fn resolve_window(start: Option<NaiveDate>, end: Option<NaiveDate>) -> (NaiveDate, NaiveDate) {
    let (default_start, default_end) = stations::default_window();

    (start.unwrap_or(default_start), end.unwrap_or(default_end))
}

// -- Tests -------------------------------------------------------------------
