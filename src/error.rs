use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Unable to parse config")]
    TomlRead(#[from] toml::de::Error),

    #[error("Unable to serialize config")]
    TomlWrite(#[from] toml::ser::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("No bands selected")]
    NoBands,

    #[error("{bands} bands but {resolutions} original resolutions")]
    BandResolutionMismatch { bands: usize, resolutions: usize },

    #[error("Expected 4 season dates, found {0}")]
    SeasonDateCount(usize),

    #[error("Invalid season date '{date}' for year {year}")]
    InvalidSeasonDate { year: i32, date: String },

    #[error("Unable to resolve installation directory of {0}")]
    InstallDir(PathBuf),

    #[error("Failed to start '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

impl LaunchError {
    /// Exit status the launcher reports when it fails before or while
    /// starting the downloader.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::Spawn { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                127
            }
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;
