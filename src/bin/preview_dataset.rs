//! Dataset Preview Utility
//!
//! Fetches a short recent slice of one configured ERDDAP dataset and prints
//! the raw CSV header, units row and first data rows, to check a dataset's
//! variable vocabulary before wiring it into the registry.
//!
//! Self-contained on purpose: the crate has no library target, so the URL
//! building is inlined here.

use anyhow::{bail, Result};
use chrono::{Duration, Utc};

const SERVER: &str = "https://erddap.dataexplorer.oceanobservatories.org/erddap";
const DATASET: &str = "ooi-cp04ossm-rid27-02-flortd000";
const VARS: &str = "mass_concentration_of_chlorophyll_a_in_sea_water,sea_water_temperature";
const PREVIEW_ROWS: usize = 10;

#[tokio::main]
async fn main() -> Result<()> {
    println!("🔍 Dataset Preview Utility\n");

    let end = Utc::now().date_naive();
    let start = end - Duration::days(30);

    let url = format!(
        "{}/tabledap/{}.csv?time,{}&time%3E={}&time%3C={}",
        SERVER, DATASET, VARS, start, end
    );

    println!("📦 Dataset: {}", DATASET);
    println!("🌐 GET {}\n", url);

    let response = reqwest::get(&url).await?;
    if !response.status().is_success() {
        bail!("ERDDAP request failed: {}", response.status());
    }

    let body = response.text().await?;
    let mut lines = body.lines();

    match lines.next() {
        Some(header) => println!("Header: {}", header),
        None => bail!("empty payload"),
    }
    match lines.next() {
        Some(units) => println!("Units:  {}\n", units),
        None => bail!("payload has no units row"),
    }

    let mut shown = 0;
    let mut total = 0;
    for line in lines {
        total += 1;
        if shown < PREVIEW_ROWS {
            println!("  {}", line);
            shown += 1;
        }
    }

    println!("\n✅ {} data rows over the last 30 days", total);

    Ok(())
}
