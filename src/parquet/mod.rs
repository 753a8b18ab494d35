//! Handles serialising and saving data to disk in the _parquet_ file format.

pub mod combined;
pub mod long_form;

pub use combined::save_combined;
pub use long_form::save_long_form;
