//! `git clone`.

use std::path::Path;

use crate::builder::{CommandState, impl_command_builder};
use crate::errors::GitError;
use crate::repository::GitRepository;

/// Clones a repository into the repository path.
///
/// The command runs from the parent of the repository path, since the
/// target directory usually does not exist yet.
#[derive(Debug)]
pub struct CloneCommandBuilder {
    state: CommandState,
    target: String,
}

impl_command_builder!(CloneCommandBuilder);

impl CloneCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        let mut state = CommandState::new(repository, "clone");
        let path = repository.path();
        // An empty parent means the process's own current directory.
        state.set_working_dir(path.parent().unwrap_or(Path::new("")));
        Self {
            state,
            target: path.to_string_lossy().into_owned(),
        }
    }

    /// Suppress progress output.
    pub fn quiet(&mut self) -> &mut Self {
        self.state.arg("--quiet");
        self
    }

    /// Be verbose.
    pub fn verbose(&mut self) -> &mut Self {
        self.state.arg("--verbose");
        self
    }

    /// Bypass the transport when cloning from a local path.
    pub fn local(&mut self) -> &mut Self {
        self.state.arg("--local");
        self
    }

    /// Copy objects instead of hardlinking for local clones.
    pub fn no_hardlinks(&mut self) -> &mut Self {
        self.state.arg("--no-hardlinks");
        self
    }

    /// Share objects with the source repository via alternates.
    pub fn shared(&mut self) -> &mut Self {
        self.state.arg("--shared");
        self
    }

    /// Do not check out HEAD after cloning.
    pub fn no_checkout(&mut self) -> &mut Self {
        self.state.arg("--no-checkout");
        self
    }

    /// Make a bare clone.
    pub fn bare(&mut self) -> &mut Self {
        self.state.arg("--bare");
        self
    }

    /// Make a mirror clone.
    pub fn mirror(&mut self) -> &mut Self {
        self.state.arg("--mirror");
        self
    }

    /// Name the upstream remote something other than `origin`.
    pub fn origin(&mut self, name: &str) -> &mut Self {
        self.state.arg("--origin");
        self.state.arg(name);
        self
    }

    /// Check out `name` instead of the remote's HEAD.
    pub fn branch(&mut self, name: &str) -> &mut Self {
        self.state.arg("--branch");
        self.state.arg(name);
        self
    }

    /// Create a shallow clone with `depth` commits.
    pub fn depth(&mut self, depth: u32) -> &mut Self {
        self.state.arg(format!("--depth={depth}"));
        self
    }

    /// Only fetch the history of one branch.
    pub fn single_branch(&mut self) -> &mut Self {
        self.state.arg("--single-branch");
        self
    }

    /// Initialize submodules after cloning.
    pub fn recursive(&mut self) -> &mut Self {
        self.state.arg("--recursive");
        self
    }

    /// Set a configuration variable in the new repository.
    pub fn config(&mut self, key: &str, value: &str) -> &mut Self {
        self.state.arg("--config");
        self.state.arg(format!("{key}={value}"));
        self
    }

    /// Borrow objects from a reference repository.
    pub fn reference(&mut self, repository: &str) -> &mut Self {
        self.state.arg("--reference");
        self.state.arg(repository);
        self
    }

    /// Clone `url` into the repository path.
    pub fn execute(&mut self, url: &str) -> Result<String, GitError> {
        let target = self.target.clone();
        self.state.run(vec![url.to_string(), target])
    }
}
