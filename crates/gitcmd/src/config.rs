//! Settings shared by every command built from one repository.

use std::sync::Arc;
use std::time::Duration;

use crate::errors::GitError;
use crate::logger::{Logger, NullLogger};

/// Executable name used when none is configured.
pub const DEFAULT_EXECUTABLE: &str = "git";

/// Shared git configuration: executable, signing identities, logger.
#[derive(Debug, Clone)]
pub struct GitConfig {
    executable: String,
    sign_commit_user: Option<String>,
    sign_tag_user: Option<String>,
    logger: Arc<dyn Logger>,
    timeout: Option<Duration>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            executable: DEFAULT_EXECUTABLE.to_string(),
            sign_commit_user: None,
            sign_tag_user: None,
            logger: Arc::new(NullLogger),
            timeout: None,
        }
    }
}

impl GitConfig {
    /// Create a configuration running `git` from `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with `git` resolved to an absolute path now.
    ///
    /// # Errors
    ///
    /// Returns an error if git is not found in PATH.
    pub fn discover() -> Result<Self, GitError> {
        let path = which::which(DEFAULT_EXECUTABLE).map_err(|_| GitError::NotFound)?;
        Ok(Self::default().with_executable(path.to_string_lossy()))
    }

    /// Set the path to the git executable.
    #[must_use]
    pub fn with_executable(mut self, path: impl Into<String>) -> Self {
        self.executable = path.into();
        self
    }

    /// Path to the git executable.
    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// Sign commits with the given GPG key id.
    #[must_use]
    pub fn with_sign_commits(mut self, user: impl Into<String>) -> Self {
        self.sign_commit_user = Some(user.into());
        self
    }

    /// Stop signing commits.
    #[must_use]
    pub fn without_sign_commits(mut self) -> Self {
        self.sign_commit_user = None;
        self
    }

    /// Key id commits are signed with.
    pub fn sign_commit_user(&self) -> Option<&str> {
        self.sign_commit_user.as_deref().filter(|u| !u.is_empty())
    }

    /// Whether commits get signed.
    pub fn is_sign_commits_enabled(&self) -> bool {
        self.sign_commit_user().is_some()
    }

    /// Sign tags with the given GPG key id.
    #[must_use]
    pub fn with_sign_tags(mut self, user: impl Into<String>) -> Self {
        self.sign_tag_user = Some(user.into());
        self
    }

    /// Stop signing tags.
    #[must_use]
    pub fn without_sign_tags(mut self) -> Self {
        self.sign_tag_user = None;
        self
    }

    /// Key id tags are signed with.
    pub fn sign_tag_user(&self) -> Option<&str> {
        self.sign_tag_user.as_deref().filter(|u| !u.is_empty())
    }

    /// Whether tags get signed.
    pub fn is_sign_tags_enabled(&self) -> bool {
        self.sign_tag_user().is_some()
    }

    /// Replace the debug logger.
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// The debug logger.
    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    /// Kill commands that run longer than `timeout`.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Per-command run time limit.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
