//! `git branch`.

use crate::builder::{CommandState, impl_command_builder};
use crate::errors::GitError;
use crate::parse::name_list;
use crate::repository::GitRepository;

/// Lists, creates and deletes branches.
#[derive(Debug)]
pub struct BranchCommandBuilder {
    state: CommandState,
}

impl_command_builder!(BranchCommandBuilder);

impl BranchCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "branch"),
        }
    }

    /// Delete a fully merged branch.
    pub fn delete(&mut self) -> &mut Self {
        self.state.arg("--delete");
        self
    }

    /// Delete a branch regardless of merge status.
    pub fn force_delete(&mut self) -> &mut Self {
        self.state.arg("-D");
        self
    }

    /// Rename a branch.
    pub fn move_branch(&mut self) -> &mut Self {
        self.state.arg("--move");
        self
    }

    /// Rename a branch even if the new name exists.
    pub fn force_move(&mut self) -> &mut Self {
        self.state.arg("-M");
        self
    }

    /// Allow overwriting an existing branch.
    pub fn force(&mut self) -> &mut Self {
        self.state.arg("--force");
        self
    }

    /// Operate on remote-tracking branches.
    pub fn remotes(&mut self) -> &mut Self {
        self.state.arg("--remotes");
        self
    }

    /// Operate on local and remote-tracking branches.
    pub fn all(&mut self) -> &mut Self {
        self.state.arg("--all");
        self
    }

    /// List branches, optionally filtered by the positional pattern.
    pub fn list(&mut self) -> &mut Self {
        self.state.arg("--list");
        self
    }

    /// Show hash and subject for each branch.
    pub fn verbose(&mut self) -> &mut Self {
        self.state.arg("--verbose");
        self
    }

    /// Track `upstream` from the current or positional branch.
    pub fn set_upstream_to(&mut self, upstream: &str) -> &mut Self {
        self.state.arg(format!("--set-upstream-to={upstream}"));
        self
    }

    /// Forget the upstream of the current or positional branch.
    pub fn unset_upstream(&mut self) -> &mut Self {
        self.state.arg("--unset-upstream");
        self
    }

    /// Set up tracking when creating a branch.
    pub fn track(&mut self) -> &mut Self {
        self.state.arg("--track");
        self
    }

    /// Do not set up tracking when creating a branch.
    pub fn no_track(&mut self) -> &mut Self {
        self.state.arg("--no-track");
        self
    }

    /// Only list branches containing `commit`.
    pub fn contains(&mut self, commit: &str) -> &mut Self {
        self.state.arg("--contains");
        self.state.arg(commit);
        self
    }

    /// Only list branches merged into `commit`.
    pub fn merged(&mut self, commit: &str) -> &mut Self {
        self.state.arg("--merged");
        self.state.arg(commit);
        self
    }

    /// Only list branches not merged into `commit`.
    pub fn no_merged(&mut self, commit: &str) -> &mut Self {
        self.state.arg("--no-merged");
        self.state.arg(commit);
        self
    }

    /// Run with an optional branch name (or pattern, or start point pair
    /// for renames) appended.
    pub fn execute(&mut self, branch: Option<&str>) -> Result<String, GitError> {
        self.state.run(branch.map(String::from).into_iter().collect())
    }

    /// Run and return branch names.
    ///
    /// The `*` marking the current branch and the `+` marking branches
    /// checked out in other worktrees are stripped.
    pub fn get_names(&mut self) -> Result<Vec<String>, GitError> {
        let output = self.execute(None)?;
        Ok(name_list(&output)
            .into_iter()
            .map(|line| strip_marker(&line).to_string())
            .filter(|name| !name.is_empty())
            .collect())
    }
}

fn strip_marker(line: &str) -> &str {
    line.strip_prefix(|c: char| c == '*' || c == '+')
        .map_or(line, str::trim_start)
}
