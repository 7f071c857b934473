//! External program invocation.
//!
//! Programs are always started with an argument array, never a shell string,
//! so user-controlled file names cannot inject shell syntax.

use std::process::Command;

use crate::errors::ProcessError;

/// Runs an external program to completion and returns its stdout.
///
/// Adapters (`AwsCli`, `NbConvert`) take a `Runner` so their argument
/// construction and error translation can be tested without spawning.
pub trait Runner {
    /// # Errors
    ///
    /// Returns [`ProcessError`] if the program cannot be spawned, exits
    /// unsuccessfully, or writes non-UTF-8 output.
    fn run(&self, program: &str, args: &[String]) -> Result<String, ProcessError>;
}

/// Spawns real processes and blocks until they exit. No timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String, ProcessError> {
        tracing::debug!(program, ?args, "running external command");

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| ProcessError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(ProcessError::Failed {
                program: program.to_string(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| ProcessError::InvalidUtf8 {
            program: program.to_string(),
        })
    }
}

impl<R: Runner + ?Sized> Runner for &R {
    fn run(&self, program: &str, args: &[String]) -> Result<String, ProcessError> {
        (**self).run(program, args)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn captures_stdout_of_successful_command() {
        let out = SystemRunner
            .run("echo", &args(&["hello", "world"]))
            .expect("echo should run");
        assert_eq!(out.trim(), "hello world");
    }

    #[test]
    fn arguments_are_not_shell_expanded() {
        let out = SystemRunner
            .run("echo", &args(&["$(whoami); rm -rf x"]))
            .expect("echo should run");
        assert_eq!(out.trim(), "$(whoami); rm -rf x");
    }

    #[test]
    fn nonzero_exit_is_failed() {
        let err = SystemRunner.run("false", &[]).unwrap_err();
        assert!(matches!(
            err,
            ProcessError::Failed { status: Some(1), .. }
        ));
    }

    #[test]
    fn missing_binary_is_spawn_error() {
        let err = SystemRunner
            .run("qs-definitely-not-installed", &[])
            .unwrap_err();
        assert!(matches!(err, ProcessError::Spawn { .. }));
    }
}
