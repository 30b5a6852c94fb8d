//! `git add`.

use crate::builder::{CommandState, impl_command_builder, owned};
use crate::errors::GitError;
use crate::repository::GitRepository;

/// Stages file contents in the index.
#[derive(Debug)]
pub struct AddCommandBuilder {
    state: CommandState,
}

impl_command_builder!(AddCommandBuilder);

impl AddCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "add"),
        }
    }

    /// Only report what would be staged (`git add --dry-run`).
    pub fn dry_run_add(&mut self) -> &mut Self {
        self.state.arg("--dry-run");
        self
    }

    /// Be verbose.
    pub fn verbose(&mut self) -> &mut Self {
        self.state.arg("--verbose");
        self
    }

    /// Allow adding ignored files.
    pub fn force(&mut self) -> &mut Self {
        self.state.arg("--force");
        self
    }

    /// Stage modifications and removals of tracked files only.
    pub fn update(&mut self) -> &mut Self {
        self.state.arg("--update");
        self
    }

    /// Stage every change, including untracked files.
    pub fn all(&mut self) -> &mut Self {
        self.state.arg("--all");
        self
    }

    /// Ignore removed files.
    pub fn no_all(&mut self) -> &mut Self {
        self.state.arg("--no-all");
        self
    }

    /// Record that paths will be added later.
    pub fn intent_to_add(&mut self) -> &mut Self {
        self.state.arg("--intent-to-add");
        self
    }

    /// Keep going when some files cannot be added.
    pub fn ignore_errors(&mut self) -> &mut Self {
        self.state.arg("--ignore-errors");
        self
    }

    /// Stage `pathspec`.
    pub fn execute(&mut self, pathspec: &[&str]) -> Result<String, GitError> {
        self.state.run(owned(pathspec))
    }
}
