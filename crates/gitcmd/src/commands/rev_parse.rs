//! `git rev-parse`.

use crate::builder::{CommandState, impl_command_builder, owned};
use crate::errors::GitError;
use crate::repository::GitRepository;

/// Resolves revisions and repository paths.
#[derive(Debug)]
pub struct RevParseCommandBuilder {
    state: CommandState,
}

impl_command_builder!(RevParseCommandBuilder);

impl RevParseCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "rev-parse"),
        }
    }

    /// Print the short symbolic name, e.g. the current branch for `HEAD`.
    pub fn abbrev_ref(&mut self) -> &mut Self {
        self.state.arg("--abbrev-ref");
        self
    }

    /// Print the full symbolic name, e.g. `refs/heads/main`.
    pub fn symbolic_full_name(&mut self) -> &mut Self {
        self.state.arg("--symbolic-full-name");
        self
    }

    /// Require exactly one valid object name.
    pub fn verify(&mut self) -> &mut Self {
        self.state.arg("--verify");
        self
    }

    /// With `verify`, fail silently.
    pub fn quiet(&mut self) -> &mut Self {
        self.state.arg("--quiet");
        self
    }

    /// Print an abbreviated object name.
    pub fn short(&mut self, length: Option<u32>) -> &mut Self {
        match length {
            Some(n) => self.state.arg(format!("--short={n}")),
            None => self.state.arg("--short"),
        }
        self
    }

    /// Print the top-level directory of the working tree.
    pub fn show_toplevel(&mut self) -> &mut Self {
        self.state.arg("--show-toplevel");
        self
    }

    /// Print the path of the `.git` directory.
    pub fn git_dir(&mut self) -> &mut Self {
        self.state.arg("--git-dir");
        self
    }

    /// Print whether the working directory is inside a work tree.
    pub fn is_inside_work_tree(&mut self) -> &mut Self {
        self.state.arg("--is-inside-work-tree");
        self
    }

    /// Run with `args` (revisions or further options) appended.
    pub fn execute(&mut self, args: &[&str]) -> Result<String, GitError> {
        self.state.run(owned(args))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::invoker::StubInvoker;
    use crate::test_utils::{only_invocation, stub_repository};

    #[test]
    fn test_should_resolve_current_branch() {
        let (repo, invoker) = stub_repository(StubInvoker::new().with_stdout("main\n"));
        let branch = repo.rev_parse().abbrev_ref().execute(&["HEAD"]).unwrap();
        assert_eq!(branch, "main");
        assert_eq!(
            only_invocation(&invoker),
            ["git", "rev-parse", "--abbrev-ref", "HEAD"]
        );
    }

    #[test]
    fn test_should_verify_short_hash() {
        let (repo, invoker) = stub_repository(StubInvoker::new().with_stdout("1a2b3c4\n"));
        repo.rev_parse()
            .verify()
            .short(Some(7))
            .execute(&["HEAD~1"])
            .unwrap();
        assert_eq!(
            only_invocation(&invoker),
            ["git", "rev-parse", "--verify", "--short=7", "HEAD~1"]
        );
    }
}
