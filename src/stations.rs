//! Mooring registry for the OOI surface-mooring pull.
//!
//! The canonical list of moorings, their ERDDAP dataset ids, and the raw
//! variable vocabulary per dataset. This is the single source of truth —
//! other modules reference moorings from here rather than hardcoding ids.
//! The temperature variable differs per mooring (the Pioneer FLORT serves
//! `sea_water_temperature`, the Irminger one `sea_surface_temperature`),
//! so it is an explicit per-mooring field rather than a shared list.

use chrono::NaiveDate;

/// Shared raw variable names across moorings.
pub const CHLOROPHYLL_VAR: &str = "mass_concentration_of_chlorophyll_a_in_sea_water";
pub const NITRATE_VAR: &str = "mole_concentration_of_nitrate_in_sea_water_suna";
pub const NITRATE_QC_VAR: &str = "mole_concentration_of_nitrate_in_sea_water_suna_qc_agg";
pub const LIGHT_VAR: &str = "netsirr";

/// Canonical clean column names per variable group, positional.
pub const CHL_CLEAN_COLS: &[&str] = &["chl", "sst"];
pub const NITRATE_CLEAN_COLS: &[&str] = &["no3", "qc_flag"];
pub const LIGHT_CLEAN_COLS: &[&str] = &["light"];

/// Metadata for a single surface mooring.
pub struct Mooring {
    /// Station label attached to every fetched row.
    pub label: &'static str,
    /// ERDDAP dataset id for the fluorometer (chlorophyll + temperature).
    pub chl_dataset: &'static str,
    /// ERDDAP dataset id for the SUNA nitrate sensor.
    pub nitrate_dataset: &'static str,
    /// ERDDAP dataset id for the METBK shortwave irradiance sensor.
    pub light_dataset: &'static str,
    /// Temperature variable served alongside chlorophyll on this mooring.
    pub temperature_var: &'static str,
}

/// All moorings pulled by a run, central instruments, 2019-2023 coverage.
pub static MOORING_REGISTRY: &[Mooring] = &[
    Mooring {
        label: "Pioneer",
        chl_dataset: "ooi-cp04ossm-rid27-02-flortd000",
        nitrate_dataset: "ooi-cp01cnsm-rid26-07-nutnrb000",
        light_dataset: "ooi-cp01cnsm-sbd11-06-metbka000",
        temperature_var: "sea_water_temperature",
    },
    Mooring {
        label: "Irminger",
        chl_dataset: "ooi-gi01sumo-sbd12-02-flortd000",
        nitrate_dataset: "ooi-gi01sumo-sbd11-08-nutnrb000",
        light_dataset: "ooi-gi01sumo-sbd12-06-metbka000",
        temperature_var: "sea_surface_temperature",
    },
];

/// The default global fetch window, inclusive on both ends.
pub fn default_window() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    )
}

pub fn find_mooring(label: &str) -> Option<&'static Mooring> {
    MOORING_REGISTRY.iter().find(|m| m.label == label)
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn should_register_both_moorings() {
        assert_eq!(MOORING_REGISTRY.len(), 2);
        assert!(find_mooring("Pioneer").is_some());
        assert!(find_mooring("Irminger").is_some());
        assert!(find_mooring("Papa").is_none());
    }

    #[test]
    fn should_override_temperature_variable_per_mooring() {
        assert_eq!(
            find_mooring("Pioneer").unwrap().temperature_var,
            "sea_water_temperature"
        );
        assert_eq!(
            find_mooring("Irminger").unwrap().temperature_var,
            "sea_surface_temperature"
        );
    }

    #[test]
    fn should_have_well_formed_dataset_ids() {
        for mooring in MOORING_REGISTRY {
            for id in [
                mooring.chl_dataset,
                mooring.nitrate_dataset,
                mooring.light_dataset,
            ] {
                assert!(id.starts_with("ooi-"), "unexpected dataset id `{}`", id);
                assert_eq!(id, id.to_lowercase());
            }
        }
    }

    #[test]
    fn should_have_unique_dataset_ids() {
        let mut seen = HashSet::new();
        for mooring in MOORING_REGISTRY {
            for id in [
                mooring.chl_dataset,
                mooring.nitrate_dataset,
                mooring.light_dataset,
            ] {
                assert!(seen.insert(id), "dataset id `{}` registered twice", id);
            }
        }
    }

    #[test]
    fn should_order_window_bounds() {
        let (start, end) = default_window();
        assert!(start < end);
    }
}
