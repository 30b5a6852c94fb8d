//! `git push`.

use crate::builder::{CommandState, impl_command_builder};
use crate::errors::GitError;
use crate::repository::GitRepository;

/// Updates remote refs.
#[derive(Debug)]
pub struct PushCommandBuilder {
    state: CommandState,
}

impl_command_builder!(PushCommandBuilder);

impl PushCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "push"),
        }
    }

    /// Push every branch.
    pub fn all(&mut self) -> &mut Self {
        self.state.arg("--all");
        self
    }

    /// Mirror every ref.
    pub fn mirror(&mut self) -> &mut Self {
        self.state.arg("--mirror");
        self
    }

    /// Push every tag.
    pub fn tags(&mut self) -> &mut Self {
        self.state.arg("--tags");
        self
    }

    /// Push annotated tags reachable from pushed refs.
    pub fn follow_tags(&mut self) -> &mut Self {
        self.state.arg("--follow-tags");
        self
    }

    /// Let git do everything except send the update (`git push --dry-run`).
    ///
    /// Unlike [`enable_dry_run`](crate::CommandBuilder::enable_dry_run),
    /// the process does run.
    pub fn dry_run_remote(&mut self) -> &mut Self {
        self.state.arg("--dry-run");
        self
    }

    /// Overwrite remote refs that are not ancestors.
    pub fn force(&mut self) -> &mut Self {
        self.state.arg("--force");
        self
    }

    /// Force only if the remote ref is where we expect it.
    pub fn force_with_lease(&mut self, expect: Option<&str>) -> &mut Self {
        match expect {
            Some(e) => self.state.arg(format!("--force-with-lease={e}")),
            None => self.state.arg("--force-with-lease"),
        }
        self
    }

    /// Delete the listed refs on the remote.
    pub fn delete(&mut self) -> &mut Self {
        self.state.arg("--delete");
        self
    }

    /// Delete remote branches with no local counterpart.
    pub fn prune(&mut self) -> &mut Self {
        self.state.arg("--prune");
        self
    }

    /// Record the pushed branch as upstream.
    pub fn set_upstream(&mut self) -> &mut Self {
        self.state.arg("--set-upstream");
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

    /// Skip the pre-push hook.
    pub fn no_verify(&mut self) -> &mut Self {
        self.state.arg("--no-verify");
        self
    }

    /// Push `refspecs` to `repository` (default: the configured upstream).
    pub fn execute(&mut self, repository: Option<&str>, refspecs: &[&str]) -> Result<String, GitError> {
        self.state.run(remote_and_refspecs(repository, refspecs))
    }
}

/// Positionals shared by push, fetch and pull.
pub(crate) fn remote_and_refspecs(repository: Option<&str>, refspecs: &[&str]) -> Vec<String> {
    repository
        .into_iter()
        .chain(refspecs.iter().copied())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::remote_and_refspecs;
    use crate::builder::CommandBuilder;
    use crate::invoker::StubInvoker;
    use crate::test_utils::{only_invocation, split, stub_repository};

    #[test]
    fn test_should_push_branch_with_upstream() {
        let (repo, invoker) = stub_repository(StubInvoker::new());
        repo.push()
            .set_upstream()
            .execute(Some("origin"), &["main"])
            .unwrap();
        assert_eq!(
            only_invocation(&invoker),
            ["git", "push", "--set-upstream", "origin", "main"]
        );
    }

    #[test]
    fn test_should_run_remote_dry_run_for_real() {
        let (repo, invoker) = stub_repository(StubInvoker::new());
        repo.push().dry_run_remote().execute(None, &[]).unwrap();
        assert_eq!(only_invocation(&invoker), ["git", "push", "--dry-run"]);
    }

    #[test]
    fn test_should_render_lease() {
        let (repo, _) = stub_repository(StubInvoker::new());
        let line = repo
            .push()
            .force_with_lease(Some("main:abc123"))
            .enable_dry_run()
            .execute(Some("origin"), &["main"])
            .unwrap();
        assert_eq!(
            split(&line),
            ["git", "push", "--force-with-lease=main:abc123", "origin", "main"]
        );
    }

    #[test]
    fn test_should_skip_missing_remote() {
        assert_eq!(remote_and_refspecs(None, &["main"]), vec!["main"]);
        assert!(remote_and_refspecs(None, &[]).is_empty());
    }
}
