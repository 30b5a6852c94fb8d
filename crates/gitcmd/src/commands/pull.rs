//! `git pull`.

use super::push::remote_and_refspecs;
use crate::builder::{CommandState, impl_command_builder};
use crate::errors::GitError;
use crate::repository::GitRepository;

/// Fetches and integrates with another repository or branch.
#[derive(Debug)]
pub struct PullCommandBuilder {
    state: CommandState,
}

impl_command_builder!(PullCommandBuilder);

impl PullCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "pull"),
        }
    }

    /// Suppress output.
    pub fn quiet(&mut self) -> &mut Self {
        self.state.arg("--quiet");
        self
    }

    /// Be verbose.
    pub fn verbose(&mut self) -> &mut Self {
        self.state.arg("--verbose");
        self
    }

    /// Rebase instead of merging.
    pub fn rebase(&mut self) -> &mut Self {
        self.state.arg("--rebase");
        self
    }

    /// Merge instead of rebasing.
    pub fn no_rebase(&mut self) -> &mut Self {
        self.state.arg("--no-rebase");
        self
    }

    /// Refuse anything but a fast-forward.
    pub fn ff_only(&mut self) -> &mut Self {
        self.state.arg("--ff-only");
        self
    }

    /// Always create a merge commit.
    pub fn no_ff(&mut self) -> &mut Self {
        self.state.arg("--no-ff");
        self
    }

    /// Squash the fetched changes without committing.
    pub fn squash(&mut self) -> &mut Self {
        self.state.arg("--squash");
        self
    }

    /// Fetch every remote.
    pub fn all(&mut self) -> &mut Self {
        self.state.arg("--all");
        self
    }

    /// Prune stale tracking refs while fetching.
    pub fn prune(&mut self) -> &mut Self {
        self.state.arg("--prune");
        self
    }

    /// Pull `refspecs` from `repository` (default: the upstream).
    pub fn execute(&mut self, repository: Option<&str>, refspecs: &[&str]) -> Result<String, GitError> {
        self.state.run(remote_and_refspecs(repository, refspecs))
    }
}
