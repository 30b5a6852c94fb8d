//! `git fetch`.

use super::push::remote_and_refspecs;
use crate::builder::{CommandState, impl_command_builder};
use crate::errors::GitError;
use crate::repository::GitRepository;

/// Downloads objects and refs from another repository.
#[derive(Debug)]
pub struct FetchCommandBuilder {
    state: CommandState,
}

impl_command_builder!(FetchCommandBuilder);

impl FetchCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "fetch"),
        }
    }

    /// Fetch every remote.
    pub fn all(&mut self) -> &mut Self {
        self.state.arg("--all");
        self
    }

    /// Append to `FETCH_HEAD` instead of overwriting it.
    pub fn append(&mut self) -> &mut Self {
        self.state.arg("--append");
        self
    }

    /// Limit history to `depth` commits.
    pub fn depth(&mut self, depth: u32) -> &mut Self {
        self.state.arg(format!("--depth={depth}"));
        self
    }

    /// Turn a shallow repository into a complete one.
    pub fn unshallow(&mut self) -> &mut Self {
        self.state.arg("--unshallow");
        self
    }

    /// Show what would be fetched (`git fetch --dry-run`). The process
    /// still runs.
    pub fn dry_run_remote(&mut self) -> &mut Self {
        self.state.arg("--dry-run");
        self
    }

    /// Allow non-fast-forward ref updates.
    pub fn force(&mut self) -> &mut Self {
        self.state.arg("--force");
        self
    }

    /// Remove tracking refs that no longer exist on the remote.
    pub fn prune(&mut self) -> &mut Self {
        self.state.arg("--prune");
        self
    }

    /// Fetch every tag.
    pub fn tags(&mut self) -> &mut Self {
        self.state.arg("--tags");
        self
    }

    /// Do not fetch tags.
    pub fn no_tags(&mut self) -> &mut Self {
        self.state.arg("--no-tags");
        self
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

    /// Fetch `refspecs` from `repository` (default: the configured upstream).
    pub fn execute(&mut self, repository: Option<&str>, refspecs: &[&str]) -> Result<String, GitError> {
        self.state.run(remote_and_refspecs(repository, refspecs))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::invoker::{ProcessOutput, StubInvoker};
    use crate::test_utils::{only_invocation, stub_repository};

    #[test]
    fn test_should_fetch_and_prune_remote() {
        let (repo, invoker) = stub_repository(StubInvoker::new());
        repo.fetch().prune().tags().execute(Some("origin"), &[]).unwrap();
        assert_eq!(
            only_invocation(&invoker),
            ["git", "fetch", "--prune", "--tags", "origin"]
        );
    }

    #[test]
    fn test_should_report_unknown_remote() {
        let (repo, _) = stub_repository(StubInvoker::new().with_output(ProcessOutput::failure(
            128,
            "",
            "fatal: 'nowhere' does not appear to be a git repository\n",
        )));
        let err = repo.fetch().execute(Some("nowhere"), &[]).unwrap_err();
        assert_eq!(err.command_line(), Some("git fetch nowhere"));
        assert_eq!(err.exit_code(), Some(128));
    }
}
