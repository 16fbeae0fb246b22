//! External process execution.
//!
//! Discovery, identity and several probes shell out to `aws` and `curl`.
//! They all go through [`CommandRunner`] so tests can script the output.

use std::io;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use reachr_common::error::CommandError;
use tokio::process::Command;
use tokio::time::timeout;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit status was zero.
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs `program` once and waits at most `limit` for it to exit.
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        limit: Duration,
    ) -> Result<CommandOutput, CommandError>;
}

/// Runs commands on the local machine.
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        limit: Duration,
    ) -> Result<CommandOutput, CommandError> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        match timeout(limit, child).await {
            Err(_elapsed) => Err(CommandError::TimedOut {
                program: program.to_string(),
                after: limit,
            }),
            Ok(Err(e)) if e.kind() == io::ErrorKind::NotFound => Err(CommandError::NotInstalled {
                program: program.to_string(),
            }),
            Ok(Err(e)) => Err(CommandError::Spawn {
                program: program.to_string(),
                source: e,
            }),
            Ok(Ok(output)) => Ok(CommandOutput {
                success: output.status.success(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    type Reply = Result<CommandOutput, fn() -> CommandError>;

    /// Replays canned results. A reply is chosen when its key is a substring
    /// of the full command line; earlier keys win.
    #[derive(Default)]
    pub(crate) struct ScriptedRunner {
        replies: Vec<(String, Reply)>,
        pub(crate) calls: Mutex<Vec<String>>,
    }

    impl ScriptedRunner {
        pub(crate) fn reply(self, key: &str, stdout: &str) -> Self {
            let output = CommandOutput {
                success: true,
                stdout: stdout.to_string(),
                stderr: String::new(),
            };
            self.reply_output(key, output)
        }

        pub(crate) fn reply_output(mut self, key: &str, output: CommandOutput) -> Self {
            self.replies.push((key.to_string(), Ok(output)));
            self
        }

        pub(crate) fn fail(mut self, key: &str, err: fn() -> CommandError) -> Self {
            self.replies.push((key.to_string(), Err(err)));
            self
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub(crate) fn called_with(&self, needle: &str) -> bool {
            self.calls.lock().unwrap().iter().any(|c| c.contains(needle))
        }
    }

    #[async_trait]
    impl CommandRunner for ScriptedRunner {
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
            self.calls.lock().unwrap().push(line.clone());

            match self.replies.iter().find(|(key, _)| line.contains(key.as_str())) {
                Some((_, Ok(output))) => Ok(output.clone()),
                Some((_, Err(make_err))) => Err(make_err()),
                None => Err(CommandError::NotInstalled {
                    program: program.to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn missing_program_is_not_installed() {
        let result = SystemRunner
            .run("reachr-no-such-binary", &[], Duration::from_secs(1))
            .await;
        assert!(matches!(result, Err(CommandError::NotInstalled { .. })));
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn captures_stdout_and_status() {
        let output = SystemRunner
            .run("sh", &["-c", "echo hello; exit 3"], Duration::from_secs(5))
            .await
            .unwrap();
        assert!(!output.success);
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn slow_program_times_out() {
        let result = SystemRunner
            .run("sleep", &["5"], Duration::from_millis(100))
            .await;
        assert!(matches!(result, Err(CommandError::TimedOut { .. })));
    }
}
