pub mod fetch;
pub mod merged;
pub mod stations;

use std::path::PathBuf;

use chrono::{Datelike, Local};
pub use fetch::fetch;
pub use merged::merged;
pub use stations::stations;

pub fn make_parquet_file_name(dataset: &str) -> PathBuf {
    let today = Local::now();
    let file_name = format!(
        "ooidap-{}-{}-{:02}-{:02}.parquet",
        dataset,
        today.year(),
        today.month(),
        today.day()
    );

    dirs::home_dir().unwrap().join(file_name)
}

// -- Tests -------------------------------------------------------------------
