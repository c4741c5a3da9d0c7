//! In-memory mock command runner for testing collectors without spawning
//! real processes.

use crate::collector::traits::CommandRunner;
use std::collections::HashMap;
use std::io;

/// Mock command runner backed by canned stdout bytes.
///
/// Commands are keyed by their full command line (program and arguments
/// joined with spaces). A command with no registered output fails with
/// `NotFound`, which is how tests simulate a hard execution failure.
#[derive(Debug, Clone, Default)]
pub struct MockRunner {
    outputs: HashMap<String, Vec<u8>>,
}

impl MockRunner {
    /// Creates a new empty mock runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers stdout bytes for a full command line.
    pub fn add_output(&mut self, command_line: impl Into<String>, output: impl Into<Vec<u8>>) {
        self.outputs.insert(command_line.into(), output.into());
    }

    /// Removes a registered command so it fails like an unavailable utility.
    pub fn remove(&mut self, command_line: &str) {
        self.outputs.remove(command_line);
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<Vec<u8>> {
        let mut command_line = program.to_string();
        for arg in args {
            command_line.push(' ');
            command_line.push_str(arg);
        }

        self.outputs.get(&command_line).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("command not found: {}", command_line),
            )
        })
    }
}
