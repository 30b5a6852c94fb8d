//! `git merge`.

use crate::builder::{CommandState, impl_command_builder, owned};
use crate::errors::GitError;
use crate::repository::GitRepository;

/// Joins histories.
#[derive(Debug)]
pub struct MergeCommandBuilder {
    state: CommandState,
}

impl_command_builder!(MergeCommandBuilder);

impl MergeCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "merge"),
        }
    }

    /// Commit the result.
    pub fn commit(&mut self) -> &mut Self {
        self.state.arg("--commit");
        self
    }

    /// Stop before committing.
    pub fn no_commit(&mut self) -> &mut Self {
        self.state.arg("--no-commit");
        self
    }

    /// Fast-forward when possible.
    pub fn ff(&mut self) -> &mut Self {
        self.state.arg("--ff");
        self
    }

    /// Always create a merge commit.
    pub fn no_ff(&mut self) -> &mut Self {
        self.state.arg("--no-ff");
        self
    }

    /// Refuse anything but a fast-forward.
    pub fn ff_only(&mut self) -> &mut Self {
        self.state.arg("--ff-only");
        self
    }

    /// Stage the result as a single change without committing.
    pub fn squash(&mut self) -> &mut Self {
        self.state.arg("--squash");
        self
    }

    /// Use merge strategy `name`.
    pub fn strategy(&mut self, name: &str) -> &mut Self {
        self.state.arg(format!("--strategy={name}"));
        self
    }

    /// Pass `option` to the strategy.
    pub fn strategy_option(&mut self, option: &str) -> &mut Self {
        self.state.arg(format!("--strategy-option={option}"));
        self
    }

    /// Use `message` for the merge commit.
    pub fn message(&mut self, message: &str) -> &mut Self {
        self.state.arg("-m");
        self.state.arg(message);
        self
    }

    /// Abort an in-progress merge.
    pub fn abort(&mut self) -> &mut Self {
        self.state.arg("--abort");
        self
    }

    /// Suppress output.
    pub fn quiet(&mut self) -> &mut Self {
        self.state.arg("--quiet");
        self
    }

    /// Merge `commits` into the current branch.
    pub fn execute(&mut self, commits: &[&str]) -> Result<String, GitError> {
        self.state.run(owned(commits))
    }
}
