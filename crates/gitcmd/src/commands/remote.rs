//! `git remote`.

use crate::builder::{CommandState, impl_command_builder};
use crate::errors::GitError;
use crate::parse::name_list;
use crate::repository::GitRepository;

/// Manages the set of tracked repositories.
#[derive(Debug)]
pub struct RemoteCommandBuilder {
    state: CommandState,
}

impl_command_builder!(RemoteCommandBuilder);

impl RemoteCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "remote"),
        }
    }

    /// Show the URL after each name.
    pub fn verbose(&mut self) -> &mut Self {
        self.state.arg("--verbose");
        self
    }

    /// Add remote `name` pointing at `url`.
    pub fn add(&mut self, name: &str, url: &str) -> &mut Self {
        self.state.arg("add");
        self.state.arg(name);
        self.state.arg(url);
        self
    }

    /// Rename remote `old` to `new`.
    pub fn rename(&mut self, old: &str, new: &str) -> &mut Self {
        self.state.arg("rename");
        self.state.arg(old);
        self.state.arg(new);
        self
    }

    /// Remove remote `name` and its tracking branches.
    pub fn remove(&mut self, name: &str) -> &mut Self {
        self.state.arg("remove");
        self.state.arg(name);
        self
    }

    /// Set the default branch of remote `name`. `None` asks the remote.
    pub fn set_head(&mut self, name: &str, branch: Option<&str>) -> &mut Self {
        self.state.arg("set-head");
        self.state.arg(name);
        match branch {
            Some(b) => self.state.arg(b),
            None => self.state.arg("--auto"),
        }
        self
    }

    /// Replace the branches tracked for remote `name`.
    pub fn set_branches(&mut self, name: &str, branches: &[&str]) -> &mut Self {
        self.state.arg("set-branches");
        self.state.arg(name);
        for branch in branches {
            self.state.arg(*branch);
        }
        self
    }

    /// Change the fetch URL of remote `name`.
    pub fn set_url(&mut self, name: &str, url: &str) -> &mut Self {
        self.state.arg("set-url");
        self.state.arg(name);
        self.state.arg(url);
        self
    }

    /// Change the push URL of remote `name`.
    pub fn set_push_url(&mut self, name: &str, url: &str) -> &mut Self {
        self.state.arg("set-url");
        self.state.arg("--push");
        self.state.arg(name);
        self.state.arg(url);
        self
    }

    /// Delete stale tracking branches of remote `name`.
    pub fn prune(&mut self, name: &str) -> &mut Self {
        self.state.arg("prune");
        self.state.arg(name);
        self
    }

    /// Fetch updates for every remote, or the named groups.
    pub fn update(&mut self, groups: &[&str]) -> &mut Self {
        self.state.arg("update");
        for group in groups {
            self.state.arg(*group);
        }
        self
    }

    /// Run the configured operation.
    pub fn execute(&mut self) -> Result<String, GitError> {
        self.state.run(Vec::new())
    }

    /// Run and return remote names, one per line of output.
    pub fn get_names(&mut self) -> Result<Vec<String>, GitError> {
        Ok(name_list(&self.execute()?))
    }
}
