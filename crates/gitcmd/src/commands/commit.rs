//! `git commit`.

use tracing::debug;

use crate::builder::{CommandState, impl_command_builder};
use crate::errors::GitError;
use crate::repository::GitRepository;

/// Records staged changes.
///
/// When the repository configuration carries a commit-signing identity and
/// no signing choice was made on the builder, the commit is signed with that
/// identity.
#[derive(Debug)]
pub struct CommitCommandBuilder {
    state: CommandState,
    signing_chosen: bool,
}

impl_command_builder!(CommitCommandBuilder);

impl CommitCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "commit"),
            signing_chosen: false,
        }
    }

    /// Stage modified and deleted tracked files first.
    pub fn all(&mut self) -> &mut Self {
        self.state.arg("--all");
        self
    }

    /// Use `message` as the commit message.
    pub fn message(&mut self, message: &str) -> &mut Self {
        self.state.arg("-m");
        self.state.arg(message);
        self
    }

    /// Read the message from `path`.
    pub fn file(&mut self, path: &str) -> &mut Self {
        self.state.arg(format!("--file={path}"));
        self
    }

    /// Override the author, e.g. `"Jane <jane@example.com>"`.
    pub fn author(&mut self, author: &str) -> &mut Self {
        self.state.arg(format!("--author={author}"));
        self
    }

    /// Override the author date.
    pub fn date(&mut self, date: &str) -> &mut Self {
        self.state.arg(format!("--date={date}"));
        self
    }

    /// Replace the tip commit.
    pub fn amend(&mut self) -> &mut Self {
        self.state.arg("--amend");
        self
    }

    /// Allow a commit with no changes.
    pub fn allow_empty(&mut self) -> &mut Self {
        self.state.arg("--allow-empty");
        self
    }

    /// Skip the pre-commit and commit-msg hooks.
    pub fn no_verify(&mut self) -> &mut Self {
        self.state.arg("--no-verify");
        self
    }

    /// Add a `Signed-off-by` trailer.
    pub fn signoff(&mut self) -> &mut Self {
        self.state.arg("--signoff");
        self
    }

    /// Reuse the message and authorship of `commit`.
    pub fn reuse_message(&mut self, commit: &str) -> &mut Self {
        self.state.arg(format!("--reuse-message={commit}"));
        self
    }

    /// GPG-sign the commit, with `key_id` or the default key.
    pub fn gpg_sign(&mut self, key_id: Option<&str>) -> &mut Self {
        self.signing_chosen = true;
        match key_id {
            Some(key) => self.state.arg(format!("--gpg-sign={key}")),
            None => self.state.arg("--gpg-sign"),
        }
        self
    }

    /// Do not sign, overriding configuration.
    pub fn no_gpg_sign(&mut self) -> &mut Self {
        self.signing_chosen = true;
        self.state.arg("--no-gpg-sign");
        self
    }

    /// Create the commit.
    pub fn execute(&mut self) -> Result<String, GitError> {
        if !self.signing_chosen
            && let Some(user) = self.state.config().sign_commit_user().map(String::from)
        {
            debug!(user = %user, "signing commit with configured identity");
            self.state.arg(format!("--gpg-sign={user}"));
            self.signing_chosen = true;
        }
        self.state.run(Vec::new())
    }
}
