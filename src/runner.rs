//! Child process execution.
use crate::error::{LaunchError, Result};
use log::debug;
use std::process::ExitStatus;
use tokio::process::Command;

pub trait ProcessRunner {
    /// Run `program` with `args` to completion and return its exit code.
    async fn run(self: &Self, program: &str, args: &[String]) -> Result<i32>;
}

/// Spawns a real child with inherited stdin, stdout and stderr.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    async fn run(self: &Self, program: &str, args: &[String]) -> Result<i32> {
        let status = Command::new(program)
            .args(args)
            .status()
            .await
            .map_err(|source| LaunchError::Spawn {
                program: program.to_string(),
                source,
            })?;
        debug!("{} exited with {}", program, status);
        Ok(exit_code(status))
    }
}

/// Exit code a shell would report for `status`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[tokio::test]
    async fn test_success() {
        let code = SystemRunner.run("sh", &sh("exit 0")).await.unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_failure_code_is_unchanged() {
        let code = SystemRunner.run("sh", &sh("exit 3")).await.unwrap();
        assert_eq!(code, 3);
        let code = SystemRunner.run("sh", &sh("exit 200")).await.unwrap();
        assert_eq!(code, 200);
    }

    #[tokio::test]
    async fn test_killed_by_signal() {
        let code = SystemRunner.run("sh", &sh("kill -TERM $$")).await.unwrap();
        assert_eq!(code, 128 + 15);
    }

    #[tokio::test]
    async fn test_missing_program() {
        let err = SystemRunner
            .run("ssl4eo-launch-no-such-program", &[])
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), 127);
    }
}
