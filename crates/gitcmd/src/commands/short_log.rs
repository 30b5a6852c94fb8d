//! `git shortlog`.

use crate::builder::{CommandState, impl_command_builder};
use crate::errors::GitError;
use crate::repository::GitRepository;

/// Summarizes history by author.
#[derive(Debug)]
pub struct ShortLogCommandBuilder {
    state: CommandState,
}

impl_command_builder!(ShortLogCommandBuilder);

impl ShortLogCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "shortlog"),
        }
    }

    /// Sort by commit count.
    pub fn numbered(&mut self) -> &mut Self {
        self.state.arg("--numbered");
        self
    }

    /// Only print counts.
    pub fn summary(&mut self) -> &mut Self {
        self.state.arg("--summary");
        self
    }

    /// Show author emails.
    pub fn email(&mut self) -> &mut Self {
        self.state.arg("--email");
        self
    }

    /// Summarize `range`, default `HEAD`.
    ///
    /// `HEAD` is passed explicitly when no range is given, since shortlog
    /// reads stdin otherwise and stdin is closed.
    pub fn execute(&mut self, range: Option<&str>) -> Result<String, GitError> {
        self.state.run(vec![range.unwrap_or("HEAD").to_string()])
    }
}
