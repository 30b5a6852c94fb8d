//! `git init`.

use crate::builder::{CommandState, impl_command_builder};
use crate::errors::GitError;
use crate::repository::GitRepository;

/// Creates an empty repository at the repository path.
#[derive(Debug)]
pub struct InitCommandBuilder {
    state: CommandState,
}

impl_command_builder!(InitCommandBuilder);

impl InitCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "init"),
        }
    }

    /// Only print error and warning messages.
    pub fn quiet(&mut self) -> &mut Self {
        self.state.arg("--quiet");
        self
    }

    /// Create a bare repository.
    pub fn bare(&mut self) -> &mut Self {
        self.state.arg("--bare");
        self
    }

    /// Copy files from a template directory.
    pub fn template(&mut self, dir: &str) -> &mut Self {
        self.state.arg(format!("--template={dir}"));
        self
    }

    /// Keep the repository data in a directory outside the working tree.
    pub fn separate_git_dir(&mut self, dir: &str) -> &mut Self {
        self.state.arg(format!("--separate-git-dir={dir}"));
        self
    }

    /// Make the repository shared among several users.
    pub fn shared(&mut self, permissions: Option<&str>) -> &mut Self {
        match permissions {
            Some(p) => self.state.arg(format!("--shared={p}")),
            None => self.state.arg("--shared"),
        }
        self
    }

    /// Name of the initial branch.
    pub fn initial_branch(&mut self, name: &str) -> &mut Self {
        self.state.arg(format!("--initial-branch={name}"));
        self
    }

    /// Run `git init`.
    pub fn execute(&mut self) -> Result<String, GitError> {
        self.state.run(Vec::new())
    }
}
