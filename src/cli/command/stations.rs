//! Print the configured mooring registry. No network access.

use anyhow::Result;

use crate::stations::{self, MOORING_REGISTRY};

pub fn stations() -> Result<()> {
    let (start, end) = stations::default_window();
    println!("Default window: {} to {}\n", start, end);

    for mooring in MOORING_REGISTRY {
        println!("{}", mooring.label);
        println!("  chlorophyll dataset: {}", mooring.chl_dataset);
        println!("  nitrate dataset:     {}", mooring.nitrate_dataset);
        println!("  light dataset:       {}", mooring.light_dataset);
        println!("  temperature variable: {}", mooring.temperature_var);
        println!();
    }

    Ok(())
}
