//! Flag list passed to `download_ssl4eo.py`.
use crate::error::Result;
use crate::launch_config::LaunchConfig;

/// Accumulates `--flag value...` groups in insertion order.
#[derive(Debug, Default)]
pub struct ArgList {
    args: Vec<String>,
}

impl ArgList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flag followed by a single value.
    pub fn value(mut self, flag: &str, value: impl ToString) -> Self {
        self.args.push(flag.to_string());
        self.args.push(value.to_string());
        self
    }

    /// Add a flag followed by every item of `values`, order preserved.
    pub fn values<T: ToString>(mut self, flag: &str, values: impl IntoIterator<Item = T>) -> Self {
        self.args.push(flag.to_string());
        self.args.extend(values.into_iter().map(|v| v.to_string()));
        self
    }

    /// Add a bare flag when `enabled`.
    pub fn flag(mut self, flag: &str, enabled: bool) -> Self {
        if enabled {
            self.args.push(flag.to_string());
        }
        self
    }

    pub fn build(self) -> Vec<String> {
        self.args
    }
}

pub fn downloader_args(config: &LaunchConfig) -> Result<Vec<String>> {
    config.validate()?;

    let paths = &config.paths;
    let satellite = &config.satellite;
    let execution = &config.execution;
    let dates = config
        .dates()?
        .into_iter()
        .map(|d| d.format("%Y-%m-%d").to_string());

    let args = ArgList::new()
        .value("--save-path", &paths.save_path)
        .value("--collection", &satellite.collection)
        .value("--qa-band", &satellite.qa_band)
        .value("--qa-cloud-bit", satellite.qa_cloud_bit)
        .value("--meta-cloud-name", &satellite.meta_cloud_name)
        .value("--cloud-pct", satellite.cloud_pct)
        .values("--dates", dates)
        .value("--radius", config.radius())
        .values("--bands", &satellite.bands)
        .values("--original-resolutions", &satellite.original_resolutions)
        .value("--new-resolutions", satellite.new_resolution)
        .value("--dtype", &satellite.dtype)
        .value("--num-workers", execution.num_workers)
        .value("--log-freq", execution.log_freq)
        .value("--match-file", &paths.match_file)
        .values("--indices-range", [execution.start_index, execution.end_index])
        .flag("--debug", execution.debug)
        .build();
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LaunchError;
    use crate::presets;

    const FLAGS: [&str; 17] = [
        "--save-path",
        "--collection",
        "--qa-band",
        "--qa-cloud-bit",
        "--meta-cloud-name",
        "--cloud-pct",
        "--dates",
        "--radius",
        "--bands",
        "--original-resolutions",
        "--new-resolutions",
        "--dtype",
        "--num-workers",
        "--log-freq",
        "--match-file",
        "--indices-range",
        "--debug",
    ];

    fn default_args() -> Vec<String> {
        let config = presets::load(presets::DEFAULT_PRESET).unwrap();
        downloader_args(&config).unwrap()
    }

    /// Values following `flag`, up to the next flag.
    fn values_of<'a>(args: &'a [String], flag: &str) -> Vec<&'a str> {
        let start = args.iter().position(|a| a == flag).unwrap() + 1;
        args[start..]
            .iter()
            .take_while(|a| !a.starts_with("--"))
            .map(|a| a.as_str())
            .collect()
    }

    #[test]
    fn test_every_flag_exactly_once() {
        let args = default_args();
        for flag in FLAGS {
            let count = args.iter().filter(|a| a.as_str() == flag).count();
            assert_eq!(count, 1, "{}", flag);
        }
        let flag_count = args.iter().filter(|a| a.starts_with("--")).count();
        assert_eq!(flag_count, FLAGS.len());
    }

    #[test]
    fn test_values_match_config() {
        let args = default_args();
        assert_eq!(values_of(&args, "--save-path"), ["data/ssl4eo-s12-60m"]);
        assert_eq!(values_of(&args, "--collection"), ["COPERNICUS/S2_HARMONIZED"]);
        assert_eq!(values_of(&args, "--qa-band"), ["QA60"]);
        assert_eq!(values_of(&args, "--qa-cloud-bit"), ["10"]);
        assert_eq!(values_of(&args, "--meta-cloud-name"), ["CLOUDY_PIXEL_PERCENTAGE"]);
        assert_eq!(values_of(&args, "--cloud-pct"), ["20"]);
        assert_eq!(
            values_of(&args, "--dates"),
            ["2021-03-20", "2021-06-21", "2021-09-23", "2021-12-21"]
        );
        assert_eq!(values_of(&args, "--radius"), ["7920"]);
        assert_eq!(values_of(&args, "--new-resolutions"), ["60"]);
        assert_eq!(values_of(&args, "--dtype"), ["uint16"]);
        assert_eq!(values_of(&args, "--num-workers"), ["8"]);
        assert_eq!(values_of(&args, "--log-freq"), ["1"]);
        assert_eq!(
            values_of(&args, "--match-file"),
            ["data/ssl4eo-s12-60m/sampled_locations.csv"]
        );
        assert_eq!(values_of(&args, "--indices-range"), ["0", "10"]);
        assert_eq!(args.last().unwrap(), "--debug");
    }

    #[test]
    fn test_bands_and_resolutions_keep_order() {
        let args = default_args();
        let bands = values_of(&args, "--bands");
        let resolutions = values_of(&args, "--original-resolutions");
        assert_eq!(bands, ["B1", "B9", "B10", "B11"]);
        assert_eq!(resolutions, ["60", "60", "60", "20"]);
        assert_eq!(bands.len(), resolutions.len());
    }

    #[test]
    fn test_debug_flag_omitted() {
        let mut config = presets::load(presets::DEFAULT_PRESET).unwrap();
        config.execution.debug = false;
        let args = downloader_args(&config).unwrap();
        assert!(!args.iter().any(|a| a == "--debug"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = presets::load(presets::DEFAULT_PRESET).unwrap();
        config.satellite.bands.pop();
        assert!(matches!(
            downloader_args(&config),
            Err(LaunchError::BandResolutionMismatch { .. })
        ));
    }
}
