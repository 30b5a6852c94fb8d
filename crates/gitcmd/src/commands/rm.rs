//! `git rm`.

use crate::builder::{CommandState, impl_command_builder, owned};
use crate::errors::GitError;
use crate::repository::GitRepository;

/// Removes files from the working tree and the index.
#[derive(Debug)]
pub struct RmCommandBuilder {
    state: CommandState,
}

impl_command_builder!(RmCommandBuilder);

impl RmCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "rm"),
        }
    }

    /// Remove even when the file has local modifications.
    pub fn force(&mut self) -> &mut Self {
        self.state.arg("--force");
        self
    }

    /// Only report what would be removed (`git rm --dry-run`).
    pub fn dry_run_rm(&mut self) -> &mut Self {
        self.state.arg("--dry-run");
        self
    }

    /// Recurse into a leading directory.
    pub fn recursive(&mut self) -> &mut Self {
        self.state.arg("-r");
        self
    }

    /// Unstage only; keep the working tree file.
    pub fn cached(&mut self) -> &mut Self {
        self.state.arg("--cached");
        self
    }

    /// Succeed even when nothing matched.
    pub fn ignore_unmatch(&mut self) -> &mut Self {
        self.state.arg("--ignore-unmatch");
        self
    }

    /// Do not list removed files.
    pub fn quiet(&mut self) -> &mut Self {
        self.state.arg("--quiet");
        self
    }

    /// Remove `pathspec`.
    pub fn execute(&mut self, pathspec: &[&str]) -> Result<String, GitError> {
        self.state.run(owned(pathspec))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::invoker::StubInvoker;
    use crate::test_utils::{only_invocation, stub_repository};

    #[test]
    fn test_should_unstage_file() {
        let (repo, invoker) = stub_repository(StubInvoker::new().with_stdout("rm 'test.txt'\n"));
        let out = repo.rm().cached().execute(&["test.txt"]).unwrap();
        assert_eq!(out, "rm 'test.txt'");
        assert_eq!(
            only_invocation(&invoker),
            ["git", "rm", "--cached", "test.txt"]
        );
    }

    #[test]
    fn test_should_remove_directory_recursively() {
        let (repo, invoker) = stub_repository(StubInvoker::new());
        repo.rm().recursive().force().execute(&["build"]).unwrap();
        assert_eq!(
            only_invocation(&invoker),
            ["git", "rm", "-r", "--force", "build"]
        );
    }
}
