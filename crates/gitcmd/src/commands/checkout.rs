//! `git checkout`.

use crate::builder::{CommandState, impl_command_builder};
use crate::errors::GitError;
use crate::repository::GitRepository;

/// Switches branches or restores working tree files.
#[derive(Debug)]
pub struct CheckoutCommandBuilder {
    state: CommandState,
}

impl_command_builder!(CheckoutCommandBuilder);

impl CheckoutCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "checkout"),
        }
    }

    /// Suppress feedback messages.
    pub fn quiet(&mut self) -> &mut Self {
        self.state.arg("--quiet");
        self
    }

    /// Discard local changes when switching.
    pub fn force(&mut self) -> &mut Self {
        self.state.arg("--force");
        self
    }

    /// Check out our side of unmerged paths.
    pub fn ours(&mut self) -> &mut Self {
        self.state.arg("--ours");
        self
    }

    /// Check out their side of unmerged paths.
    pub fn theirs(&mut self) -> &mut Self {
        self.state.arg("--theirs");
        self
    }

    /// Create branch `name` and switch to it.
    pub fn create_branch(&mut self, name: &str) -> &mut Self {
        self.state.arg("-b");
        self.state.arg(name);
        self
    }

    /// Create or reset branch `name` and switch to it.
    pub fn force_create_branch(&mut self, name: &str) -> &mut Self {
        self.state.arg("-B");
        self.state.arg(name);
        self
    }

    /// Set up upstream tracking for the new branch.
    pub fn track(&mut self) -> &mut Self {
        self.state.arg("--track");
        self
    }

    /// Do not set up upstream tracking.
    pub fn no_track(&mut self) -> &mut Self {
        self.state.arg("--no-track");
        self
    }

    /// Detach `HEAD` at the target commit.
    pub fn detach(&mut self) -> &mut Self {
        self.state.arg("--detach");
        self
    }

    /// Create an orphan branch `name` with no history.
    pub fn orphan(&mut self, name: &str) -> &mut Self {
        self.state.arg("--orphan");
        self.state.arg(name);
        self
    }

    /// Three-way merge local changes when switching.
    pub fn merge(&mut self) -> &mut Self {
        self.state.arg("--merge");
        self
    }

    /// Interactively select hunks.
    pub fn patch(&mut self) -> &mut Self {
        self.state.arg("--patch");
        self
    }

    /// Check out `target` (branch, commit or tree-ish). With `paths`,
    /// restore only those paths from it.
    pub fn execute(&mut self, target: Option<&str>, paths: &[&str]) -> Result<String, GitError> {
        let mut positionals: Vec<String> = target.map(String::from).into_iter().collect();
        if !paths.is_empty() {
            positionals.push("--".to_string());
            positionals.extend(paths.iter().map(|p| (*p).to_string()));
        }
        self.state.run(positionals)
    }
}
