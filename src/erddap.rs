//! ERDDAP tabledap client.
//!
//! One reusable HTTP handle per run, CSV response format. ERDDAP's CSV
//! payloads carry a units row directly after the header, which the parser
//! skips. Any service error or malformed payload is fatal — there is no
//! retry.

use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, NaiveDate, Utc};

use crate::frame::{Column, SeriesFrame};

const OOI_SERVER: &str = "https://erddap.dataexplorer.oceanobservatories.org/erddap";

pub struct ErddapClient {
    client: reqwest::Client,
    server: String,
}

impl ErddapClient {
    /// A client for the OOI data explorer ERDDAP.
    pub fn new() -> Self {
        Self::with_server(OOI_SERVER)
    }

    pub fn with_server(server: &str) -> Self {
        ErddapClient {
            client: reqwest::Client::new(),
            server: server.trim_end_matches('/').to_string(),
        }
    }

    /// The tabledap CSV download URL for one dataset over a closed window.
    /// `time` is always requested ahead of the caller's variables; the
    /// constraint operators are percent-encoded.
    fn download_url(&self, dataset_id: &str, start: NaiveDate, end: NaiveDate, vars: &[&str]) -> String {
        format!(
            "{}/tabledap/{}.csv?time,{}&time%3E={}&time%3C={}",
            self.server,
            dataset_id,
            vars.join(","),
            start,
            end
        )
    }

    /// Fetches one dataset's series over `[start, end]` and parses it into
    /// a frame carrying the given station label. Fatal on a non-success
    /// status or an empty/malformed payload.
    pub async fn fetch_series(
        &self,
        dataset_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        vars: &[&str],
        station: &str,
    ) -> Result<SeriesFrame> {
        let url = self.download_url(dataset_id, start, end, vars);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            bail!(
                "ERDDAP request for `{}` failed: {}",
                dataset_id,
                response.status()
            );
        }

        let payload = response.text().await?;
        parse_series_csv(&payload, station)
    }
}

/// Parses a tabledap CSV payload: header row, units row (skipped), then
/// data rows. Empty cells and literal `NaN` become `None`; any other
/// unparseable measurement cell is an error, as is a payload with no data
/// rows or no `time` column.
fn parse_series_csv(payload: &str, station: &str) -> Result<SeriesFrame> {
    let mut reader = csv::Reader::from_reader(payload.as_bytes());

    let headers = reader.headers()?.clone();
    let time_slot = headers
        .iter()
        .position(|h| h == "time")
        .ok_or_else(|| anyhow!("payload has no `time` column"))?;
    let measure_slots: Vec<usize> = (0..headers.len()).filter(|s| *s != time_slot).collect();

    let mut columns: Vec<Column> = measure_slots
        .iter()
        .map(|s| Column::new(&headers[*s]))
        .collect();
    let mut times = Vec::new();

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if row == 0 {
            // units row
            continue;
        }

        let stamp = record
            .get(time_slot)
            .ok_or_else(|| anyhow!("data row missing `time` cell"))?;
        let time = DateTime::parse_from_rfc3339(stamp)
            .map_err(|_| anyhow!("invalid timestamp `{}`", stamp))?;
        times.push(time.with_timezone(&Utc));

        for (column, slot) in columns.iter_mut().zip(&measure_slots) {
            let cell = record
                .get(*slot)
                .ok_or_else(|| anyhow!("data row missing `{}` cell", column.name))?;
            column.values.push(parse_value(cell)?);
        }
    }

    if times.is_empty() {
        bail!("dataset returned no data rows");
    }

    Ok(SeriesFrame {
        station: station.to_string(),
        times,
        columns,
    })
}

fn parse_value(cell: &str) -> Result<Option<f64>> {
    let cell = cell.trim();
    if cell.is_empty() || cell == "NaN" {
        return Ok(None);
    }

    match cell.parse::<f64>() {
        Ok(v) => Ok(Some(v)),
        Err(_) => Err(anyhow!("unparseable value cell `{}`", cell)),
    }
}

// -- Tests -------------------------------------------------------------------
