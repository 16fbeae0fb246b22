//! Shared helpers for the integration tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reachr_common::error::CommandError;
use reachr_core::command::{CommandOutput, CommandRunner};

/// A [`CommandRunner`] that answers from a fixed table instead of spawning
/// processes. The first rule whose needle appears in the command line wins;
/// unmatched commands behave as if the program were not installed.
#[derive(Default)]
pub struct FakeCloud {
    rules: Vec<(String, CommandOutput)>,
    log: Mutex<Vec<String>>,
}

impl FakeCloud {
    pub fn on(mut self, needle: &str, stdout: &str) -> Self {
        self.rules.push((
            needle.to_string(),
            CommandOutput {
                success: true,
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        ));
        self
    }

    pub fn on_failure(mut self, needle: &str, stderr: &str) -> Self {
        self.rules.push((
            needle.to_string(),
            CommandOutput {
                success: false,
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
        ));
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for FakeCloud {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        _limit: Duration,
    ) -> Result<CommandOutput, CommandError> {
        let line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<&str>>()
            .join(" ");
        self.log.lock().unwrap().push(line.clone());

        self.rules
            .iter()
            .find(|(needle, _)| line.contains(needle.as_str()))
            .map(|(_, output)| output.clone())
            .ok_or_else(|| CommandError::NotInstalled {
                program: program.to_string(),
            })
    }
}
