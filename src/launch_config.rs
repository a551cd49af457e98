use crate::error::{LaunchError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use toml;

/// Everything the launcher forwards to the downloader.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct LaunchConfig {
    pub id: String,
    pub name: String,
    pub description: String,
    pub paths: Paths,
    pub satellite: Satellite,
    pub execution: Execution,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Paths {
    pub save_path: String,
    pub match_file: String,
    /// Downloader script. Relative paths are taken from the launcher's
    /// installation directory.
    pub downloader: String,
    pub interpreter: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Satellite {
    pub collection: String,
    pub qa_band: String,
    pub qa_cloud_bit: u32,
    pub meta_cloud_name: String,
    pub cloud_pct: u32,
    pub year: i32,
    /// `MM-DD`, one per season
    pub season_dates: Vec<String>,
    pub bands: Vec<String>,
    pub original_resolutions: Vec<u32>,
    pub new_resolution: u32,
    /// Tile side in pixels
    pub size: u32,
    pub dtype: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Execution {
    pub num_workers: u32,
    pub log_freq: u32,
    pub start_index: u64,
    pub end_index: u64,
    pub debug: bool,
}

impl LaunchConfig {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn write<P: AsRef<Path>>(self: &Self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn from_template(table: &toml::Table) -> Result<Self> {
        let config: Self = toml::from_str(&table.to_string())?;
        Ok(config)
    }

    /// Half the tile extent in meters. Integer division, like the shell
    /// arithmetic it replaces.
    pub fn radius(self: &Self) -> u64 {
        u64::from(self.satellite.new_resolution) * u64::from(self.satellite.size) / 2
    }

    /// Season dates of `satellite.year`, in declared order.
    pub fn dates(self: &Self) -> Result<Vec<NaiveDate>> {
        let year = self.satellite.year;
        self.satellite
            .season_dates
            .iter()
            .map(|md| {
                NaiveDate::parse_from_str(&format!("{}-{}", year, md), "%Y-%m-%d").map_err(|_| {
                    LaunchError::InvalidSeasonDate {
                        year,
                        date: md.to_owned(),
                    }
                })
            })
            .collect()
    }

    pub fn validate(self: &Self) -> Result<()> {
        let satellite = &self.satellite;
        if satellite.bands.is_empty() {
            return Err(LaunchError::NoBands);
        }
        if satellite.bands.len() != satellite.original_resolutions.len() {
            return Err(LaunchError::BandResolutionMismatch {
                bands: satellite.bands.len(),
                resolutions: satellite.original_resolutions.len(),
            });
        }
        if satellite.season_dates.len() != 4 {
            return Err(LaunchError::SeasonDateCount(satellite.season_dates.len()));
        }
        self.dates()?;
        Ok(())
    }
}
