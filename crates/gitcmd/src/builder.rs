//! Shared argument list and the one-shot execution contract.
//!
//! Every subcommand builder embeds a [`CommandState`] and exposes it through
//! [`CommandBuilder`]. The state owns the token list (executable first,
//! subcommand second, then flags in call order), the working directory, the
//! dry-run flag and the captured output.
//!
//! A builder runs for real at most once. Dry runs render the command line
//! without spawning anything and may be repeated.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::GitConfig;
use crate::errors::GitError;
use crate::invoker::{Invocation, ProcessInvoker, render_command_line};
use crate::repository::GitRepository;

/// Where a builder is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Accepting configuration; not run yet.
    Configured,
    /// Ran and git exited successfully.
    Executed,
    /// Ran and failed. Diagnostics remain readable.
    Failed,
}

/// Arguments, working directory and execution state of one command.
#[derive(Debug)]
pub struct CommandState {
    arguments: Vec<String>,
    working_dir: PathBuf,
    dry_run: bool,
    output: Option<String>,
    stage: Stage,
    config: Arc<GitConfig>,
    invoker: Arc<dyn ProcessInvoker>,
}

impl CommandState {
    pub(crate) fn new(repository: &GitRepository, subcommand: &str) -> Self {
        let config = repository.shared_config();
        Self {
            arguments: vec![config.executable().to_string(), subcommand.to_string()],
            working_dir: repository.path().to_path_buf(),
            dry_run: false,
            output: None,
            stage: Stage::Configured,
            config,
            invoker: repository.invoker(),
        }
    }

    pub(crate) fn arg(&mut self, arg: impl Into<String>) {
        self.arguments.push(arg.into());
    }

    pub(crate) fn set_working_dir(&mut self, dir: impl Into<PathBuf>) {
        self.working_dir = dir.into();
    }

    pub(crate) fn config(&self) -> &GitConfig {
        &self.config
    }

    pub(crate) fn has_arg(&self, arg: &str) -> bool {
        self.arguments.iter().skip(2).any(|a| a == arg)
    }

    /// Tokens configured so far, executable first.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Directory the command runs in.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Whether the next run only renders the command line.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Trimmed standard output captured by a real run.
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Lifecycle stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub(crate) fn enable_dry_run(&mut self) {
        self.dry_run = true;
    }

    /// Assemble the process invocation from the configured tokens.
    ///
    /// # Errors
    ///
    /// Returns `MalformedCommand` when there are no tokens and
    /// `InvalidArgument` when a token contains a NUL byte.
    pub fn build(&self) -> Result<Invocation, GitError> {
        self.build_with(&[])
    }

    fn build_with(&self, positionals: &[String]) -> Result<Invocation, GitError> {
        if self.arguments.is_empty() {
            return Err(GitError::MalformedCommand);
        }

        let tokens: Vec<String> = self
            .arguments
            .iter()
            .chain(positionals)
            .cloned()
            .collect();

        if let Some(bad) = tokens.iter().find(|t| t.contains('\0')) {
            return Err(GitError::InvalidArgument {
                argument: bad.clone(),
            });
        }

        Ok(Invocation::new(tokens, self.working_dir.clone()).with_timeout(self.config.timeout()))
    }

    /// Run the command with `positionals` appended after every flag.
    ///
    /// Returns the trimmed standard output, or the command line in dry-run
    /// mode.
    pub(crate) fn run(&mut self, positionals: Vec<String>) -> Result<String, GitError> {
        let invocation = self.build_with(&positionals)?;
        let command_line = invocation.command_line();

        if self.stage != Stage::Configured {
            return Err(GitError::AlreadyExecuted {
                working_dir: self.working_dir.clone(),
                command_line,
                output: self.output.clone(),
            });
        }

        self.config.logger().debug(&format!(
            "Executing git command [{}] {command_line}",
            self.working_dir.display()
        ));

        if self.dry_run {
            return Ok(command_line);
        }

        self.arguments.extend(positionals);

        let output = match self.invoker.invoke(&invocation) {
            Ok(output) => output,
            Err(source) => {
                self.stage = Stage::Failed;
                return Err(match (source.kind(), invocation.timeout()) {
                    (io::ErrorKind::TimedOut, Some(timeout)) => GitError::TimedOut {
                        working_dir: self.working_dir.clone(),
                        command_line,
                        timeout,
                    },
                    _ => GitError::Spawn {
                        working_dir: self.working_dir.clone(),
                        command_line,
                        source,
                    },
                });
            }
        };

        let trimmed = trim_line_endings(&output.stdout).to_string();
        self.output = Some(trimmed.clone());

        if !output.is_success() {
            self.stage = Stage::Failed;
            return Err(GitError::CommandFailed {
                working_dir: self.working_dir.clone(),
                command_line,
                stdout: output.stdout,
                stderr: output.stderr,
                exit_code: output.exit_code,
            });
        }

        self.stage = Stage::Executed;
        Ok(trimmed)
    }

    /// The command line a run would use right now, without positionals.
    pub fn command_line(&self) -> String {
        render_command_line(&self.arguments)
    }
}

/// Strip trailing `\r` and `\n` characters, leaving everything else alone.
pub fn trim_line_endings(output: &str) -> &str {
    output.trim_end_matches(|c: char| c == '\r' || c == '\n')
}

/// Configuration surface shared by all subcommand builders.
pub trait CommandBuilder {
    /// The embedded command state.
    fn state(&self) -> &CommandState;

    /// The embedded command state, mutably.
    fn state_mut(&mut self) -> &mut CommandState;

    /// Make the terminal call return the command line instead of running it.
    ///
    /// Typed accessors such as `get_status` or `get_names` parse that line
    /// as if git had printed it, so their results are meaningless in this
    /// mode. Use `execute` for dry runs.
    fn enable_dry_run(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.state_mut().enable_dry_run();
        self
    }

    /// Output captured by the real run, if it happened.
    fn output(&self) -> Option<&str> {
        self.state().output()
    }

    /// Lifecycle stage.
    fn stage(&self) -> Stage {
        self.state().stage()
    }

    /// Tokens configured so far.
    fn arguments(&self) -> &[String] {
        self.state().arguments()
    }

    /// Assemble the invocation without running it.
    ///
    /// # Errors
    ///
    /// See [`CommandState::build`].
    fn build(&self) -> Result<Invocation, GitError> {
        self.state().build()
    }
}

/// Implement [`CommandBuilder`] for a struct holding a `state` field.
macro_rules! impl_command_builder {
    ($builder:ty) => {
        impl $crate::builder::CommandBuilder for $builder {
            fn state(&self) -> &$crate::builder::CommandState {
                &self.state
            }

            fn state_mut(&mut self) -> &mut $crate::builder::CommandState {
                &mut self.state
            }
        }
    };
}

pub(crate) use impl_command_builder;

/// Convert borrowed positionals into owned tokens.
pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
