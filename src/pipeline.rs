//! Per-mooring fetch/clean/resample orchestration.

use anyhow::Result;
use chrono::NaiveDate;

use crate::{
    clean::{summarize_daily, suppress_outliers},
    cli::create_spinner,
    erddap::ErddapClient,
    frame::{CombinedFrame, DailyFrame},
    stations::{
        self, Mooring, CHLOROPHYLL_VAR, CHL_CLEAN_COLS, LIGHT_CLEAN_COLS, LIGHT_VAR,
        NITRATE_CLEAN_COLS, NITRATE_QC_VAR, NITRATE_VAR,
    },
};

/// Deviation threshold applied to every cleaned measurement column.
const OUTLIER_THRESHOLD: f64 = 3.0;

/// The three combined datasets a run produces, one per variable group.
pub struct MeasurementGroups {
    pub chlorophyll: CombinedFrame,
    pub nitrate: CombinedFrame,
    pub light: CombinedFrame,
}

/// Runs the full ingestion for every registered mooring, sequentially, and
/// concatenates the per-mooring daily frames into the three combined
/// datasets. Any fetch or schema failure aborts the run.
pub async fn load_combined(
    client: &ErddapClient,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<MeasurementGroups> {
    let mut chl_frames = Vec::new();
    let mut nitrate_frames = Vec::new();
    let mut light_frames = Vec::new();

    for mooring in stations::MOORING_REGISTRY {
        let (chl, nitrate, light) = load_mooring(client, mooring, start, end).await?;
        chl_frames.push(chl);
        nitrate_frames.push(nitrate);
        light_frames.push(light);
    }

    Ok(MeasurementGroups {
        chlorophyll: CombinedFrame::concat(&chl_frames)?,
        nitrate: CombinedFrame::concat(&nitrate_frames)?,
        light: CombinedFrame::concat(&light_frames)?,
    })
}

/// One mooring's three variable groups: fetch, rename to clean columns,
/// suppress outliers, resample to daily. The QC flag column is carried
/// through as-is, never cleaned.
async fn load_mooring(
    client: &ErddapClient,
    mooring: &Mooring,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(DailyFrame, DailyFrame, DailyFrame)> {
    let chl_vars = [CHLOROPHYLL_VAR, mooring.temperature_var];
    let frame = fetch_group(client, mooring.chl_dataset, start, end, &chl_vars, mooring).await?;
    let frame = frame.rename_columns(CHL_CLEAN_COLS)?;
    let frame = suppress_outliers(frame, "chl", OUTLIER_THRESHOLD)?;
    let frame = suppress_outliers(frame, "sst", OUTLIER_THRESHOLD)?;
    let chl = summarize_daily(frame);

    let nitrate_vars = [NITRATE_VAR, NITRATE_QC_VAR];
    let frame = fetch_group(client, mooring.nitrate_dataset, start, end, &nitrate_vars, mooring).await?;
    let frame = frame.rename_columns(NITRATE_CLEAN_COLS)?;
    let frame = suppress_outliers(frame, "no3", OUTLIER_THRESHOLD)?;
    let nitrate = summarize_daily(frame);

    let light_vars = [LIGHT_VAR];
    let frame = fetch_group(client, mooring.light_dataset, start, end, &light_vars, mooring).await?;
    let frame = frame.rename_columns(LIGHT_CLEAN_COLS)?;
    let frame = suppress_outliers(frame, "light", OUTLIER_THRESHOLD)?;
    let light = summarize_daily(frame);

    Ok((chl, nitrate, light))
}

async fn fetch_group(
    client: &ErddapClient,
    dataset_id: &str,
    start: NaiveDate,
    end: NaiveDate,
    vars: &[&str],
    mooring: &Mooring,
) -> Result<crate::frame::SeriesFrame> {
    let bar = create_spinner(format!("Fetching `{}` ({})...", dataset_id, mooring.label));
    let frame = client
        .fetch_series(dataset_id, start, end, vars, mooring.label)
        .await?;
    bar.finish_with_message(format!("Fetched `{}` ({})", dataset_id, mooring.label));

    Ok(frame)
}
