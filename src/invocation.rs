use crate::arguments;
use crate::error::{LaunchError, Result};
use crate::launch_config::LaunchConfig;
use crate::runner::ProcessRunner;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Directory holding the running launcher executable.
pub fn install_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe
        .parent()
        .ok_or_else(|| LaunchError::InstallDir(exe.clone()))?;
    Ok(dir.to_path_buf())
}

/// One fully resolved call of the downloader.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Invocation {
    interpreter: String,
    script: PathBuf,
    args: Vec<String>,
}

impl Invocation {
    pub fn new(interpreter: &str, script: PathBuf, args: Vec<String>) -> Self {
        Self {
            interpreter: interpreter.to_string(),
            script,
            args,
        }
    }

    pub fn from_config(config: &LaunchConfig, install_dir: &Path) -> Result<Self> {
        let script = install_dir.join(&config.paths.downloader);
        let args = arguments::downloader_args(config)?;
        Ok(Self::new(&config.paths.interpreter, script, args))
    }

    pub fn interpreter(self: &Self) -> &str {
        &self.interpreter
    }

    pub fn script(self: &Self) -> &Path {
        &self.script
    }

    /// Downloader flags, without interpreter and script.
    pub fn args(self: &Self) -> &[String] {
        &self.args
    }

    /// Arguments handed to the interpreter: script first, then the flags.
    pub fn process_args(self: &Self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.push(self.script.to_string_lossy().into_owned());
        args.extend(self.args.iter().cloned());
        args
    }

    pub fn command_line(self: &Self) -> Vec<String> {
        let mut line = vec![self.interpreter.clone()];
        line.extend(self.process_args());
        line
    }

    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let invocation: Self = serde_json::from_str(&content)?;
        Ok(invocation)
    }

    pub fn write<P: AsRef<Path>>(self: &Self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Run the downloader and wait for it. The returned code is the child's
    /// exit code, untouched.
    pub async fn execute(self: &Self, runner: &impl ProcessRunner) -> Result<i32> {
        debug!("Running: {}", self.command_line().join(" "));
        let started = Instant::now();
        let code = runner
            .run(&self.interpreter, &self.process_args())
            .await?;
        info!(
            "Downloader finished with exit code {} after {:.1?}",
            code,
            started.elapsed()
        );
        Ok(code)
    }
}
