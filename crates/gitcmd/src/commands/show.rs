//! `git show`.

use crate::builder::{CommandState, impl_command_builder};
use crate::errors::GitError;
use crate::repository::GitRepository;

/// Shows objects.
#[derive(Debug)]
pub struct ShowCommandBuilder {
    state: CommandState,
}

impl_command_builder!(ShowCommandBuilder);

impl ShowCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "show"),
        }
    }

    /// Shorthand for `--pretty=oneline --abbrev-commit`.
    pub fn oneline(&mut self) -> &mut Self {
        self.state.arg("--oneline");
        self
    }

    /// Use a named or custom pretty format.
    pub fn pretty(&mut self, format: &str) -> &mut Self {
        self.state.arg(format!("--pretty={format}"));
        self
    }

    /// Use a custom format string.
    pub fn format(&mut self, format: &str) -> &mut Self {
        self.state.arg(format!("--format={format}"));
        self
    }

    /// Abbreviate commit hashes.
    pub fn abbrev_commit(&mut self) -> &mut Self {
        self.state.arg("--abbrev-commit");
        self
    }

    /// Suppress the diff.
    pub fn no_patch(&mut self) -> &mut Self {
        self.state.arg("--no-patch");
        self
    }

    /// Show a diffstat.
    pub fn stat(&mut self) -> &mut Self {
        self.state.arg("--stat");
        self
    }

    /// Show `object` (commit, tag, tree or `rev:path` blob).
    pub fn execute(&mut self, object: &str) -> Result<String, GitError> {
        self.state.run(vec![object.to_string()])
    }
}
