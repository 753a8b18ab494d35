//! Fetch, clean, merge and save the long-form dataset.

use anyhow::Result;
use chrono::NaiveDate;

use crate::{cli::create_spinner, erddap::ErddapClient, merge, parquet, pipeline};

use super::{fetch::resolve_window, make_parquet_file_name};

pub async fn merged(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<String> {
    let (start, end) = resolve_window(start, end);

    let client = ErddapClient::new();
    let groups = pipeline::load_combined(&client, start, end).await?;

    let bar = create_spinner("Merging datasets...".to_string());
    let wide = merge::outer_merge(&groups.chlorophyll, &groups.light)?;
    let wide = merge::outer_merge(&wide, &groups.nitrate)?;
    let long = merge::wide_to_long(&wide)?;
    bar.finish_with_message("Datasets merged");

    let file_path = make_parquet_file_name("merged");
    parquet::save_long_form(&long, &file_path)?;

    Ok(file_path.to_string_lossy().to_string())
}
