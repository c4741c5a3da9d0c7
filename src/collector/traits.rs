//! Abstraction for external command execution to enable testing and mocking.
//!
//! The `CommandRunner` trait is the single seam between the collectors and
//! the operating system: every utility invocation goes through it, so the
//! collectors can be driven by canned output in tests.

use std::io;
use std::process::Command;

/// Abstraction for invoking an external command and capturing its stdout.
///
/// Output is raw bytes because Windows console output must be decoded from
/// GBK before it can be treated as text.
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args`, waits for it to finish and returns its
    /// standard output.
    ///
    /// # Returns
    /// The stdout bytes, or an I/O error if the command could not be spawned
    /// or exited with a nonzero status. The call blocks with no timeout.
    fn run(&self, program: &str, args: &[&str]) -> io::Result<Vec<u8>>;
}

/// Real command runner that delegates to `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    /// Creates a new `SystemRunner` instance.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<Vec<u8>> {
        let output = Command::new(program).args(args).output()?;

        if !output.status.success() {
            return Err(io::Error::other(format!(
                "{} exited with {}",
                program, output.status
            )));
        }

        Ok(output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_runner_captures_stdout() {
        let runner = SystemRunner::new();
        let out = runner.run("echo", &["hello"]).unwrap();
        assert_eq!(String::from_utf8_lossy(&out).trim(), "hello");
    }

    #[test]
    fn test_system_runner_missing_command_is_an_error() {
        let runner = SystemRunner::new();
        assert!(runner.run("pcinfo-no-such-command-12345", &[]).is_err());
    }
}
