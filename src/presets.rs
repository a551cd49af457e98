//! Built-in launch configurations.
//!
//! Each preset is a TOML table with the same layout as a `--config` file, so
//! `ssl4eo-launch --preset <id> --write-config my.toml` gives an editable
//! starting point.
use crate::error::{LaunchError, Result};
use crate::launch_config::LaunchConfig;
use toml;

pub const DEFAULT_PRESET: &str = "s2-60m";

/// Ids of every built-in preset, default first.
pub const PRESETS: [&str; 2] = [DEFAULT_PRESET, "l8-oli-sr"];

pub fn template(id: &str) -> Result<toml::Table> {
    match id {
        "s2-60m" => Ok(sentinel2_60m_toml()),
        "l8-oli-sr" => Ok(landsat8_oli_sr_toml()),
        other => Err(LaunchError::UnknownPreset(other.to_string())),
    }
}

pub fn load(id: &str) -> Result<LaunchConfig> {
    LaunchConfig::from_template(&template(id)?)
}

pub fn sentinel2_60m_toml() -> toml::Table {
    toml::toml! {
        id = "s2-60m"

        name = "Sentinel-2 L1C, 60 m atmospheric bands"

        description = "Small debug run over the first ten sampled locations. Cirrus, water vapour\n\
        and coastal aerosol bands plus SWIR-1, resampled to a common 60 m grid."

        [paths]
        save_path = "data/ssl4eo-s12-60m"
        match_file = "data/ssl4eo-s12-60m/sampled_locations.csv"
        downloader = "../download_ssl4eo.py"
        interpreter = "python3"

        [satellite]
        collection = "COPERNICUS/S2_HARMONIZED"
        qa_band = "QA60"
        qa_cloud_bit = 10
        meta_cloud_name = "CLOUDY_PIXEL_PERCENTAGE"
        cloud_pct = 20
        year = 2021
        // Equinoxes and solstices
        season_dates = ["03-20", "06-21", "09-23", "12-21"]
        bands = ["B1", "B9", "B10", "B11"]
        original_resolutions = [60, 60, 60, 20]
        new_resolution = 60
        size = 264
        dtype = "uint16"

        [execution]
        num_workers = 8
        log_freq = 1
        start_index = 0
        end_index = 10
        debug = true
    }
}

pub fn landsat8_oli_sr_toml() -> toml::Table {
    toml::toml! {
        id = "l8-oli-sr"

        name = "Landsat 8 OLI/TIRS Collection 2 Level-2 Surface Reflectance"

        description = "Atmospherically corrected surface reflectance from the Operational Land Imager,\n\
        sampled at the same locations as the TM TOA dataset."

        [paths]
        save_path = "data/ssl4eo-l-oli-sr"
        match_file = "data/ssl4eo-l-tm-toa/sampled_locations.csv"
        downloader = "../download_ssl4eo.py"
        interpreter = "python3"

        [satellite]
        collection = "LANDSAT/LC08/C02/T1_L2"
        qa_band = "QA_PIXEL"
        qa_cloud_bit = 3
        meta_cloud_name = "CLOUD_COVER"
        cloud_pct = 20
        year = 2021
        season_dates = ["03-20", "06-21", "09-23", "12-21"]
        bands = ["SR_B1", "SR_B2", "SR_B3", "SR_B4", "SR_B5", "SR_B6", "SR_B7"]
        original_resolutions = [30, 30, 30, 30, 30, 30, 30]
        new_resolution = 30
        size = 264
        dtype = "uint16"

        [execution]
        num_workers = 40
        log_freq = 1000
        start_index = 0
        end_index = 250000
        debug = false
    }
}
