//! `git reset`.

use crate::builder::{CommandState, impl_command_builder};
use crate::errors::GitError;
use crate::repository::GitRepository;

/// Moves `HEAD` and optionally resets the index and working tree.
#[derive(Debug)]
pub struct ResetCommandBuilder {
    state: CommandState,
}

impl_command_builder!(ResetCommandBuilder);

impl ResetCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "reset"),
        }
    }

    /// Only report errors.
    pub fn quiet(&mut self) -> &mut Self {
        self.state.arg("--quiet");
        self
    }

    /// Leave index and working tree untouched.
    pub fn soft(&mut self) -> &mut Self {
        self.state.arg("--soft");
        self
    }

    /// Reset the index but not the working tree.
    pub fn mixed(&mut self) -> &mut Self {
        self.state.arg("--mixed");
        self
    }

    /// Reset index and working tree.
    pub fn hard(&mut self) -> &mut Self {
        self.state.arg("--hard");
        self
    }

    /// Reset the index, keeping unstaged changes.
    pub fn merge(&mut self) -> &mut Self {
        self.state.arg("--merge");
        self
    }

    /// Reset, aborting if local changes would be lost.
    pub fn keep(&mut self) -> &mut Self {
        self.state.arg("--keep");
        self
    }

    /// Reset to `commit` (default `HEAD`), limited to `paths` when given.
    pub fn execute(&mut self, commit: Option<&str>, paths: &[&str]) -> Result<String, GitError> {
        let mut positionals: Vec<String> = commit.map(String::from).into_iter().collect();
        if !paths.is_empty() {
            positionals.push("--".to_string());
            positionals.extend(paths.iter().map(|p| (*p).to_string()));
        }
        self.state.run(positionals)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::invoker::StubInvoker;
    use crate::test_utils::{only_invocation, stub_repository};

    #[test]
    fn test_should_hard_reset_to_commit() {
        let (repo, invoker) = stub_repository(StubInvoker::new());
        repo.reset().hard().execute(Some("HEAD~1"), &[]).unwrap();
        assert_eq!(
            only_invocation(&invoker),
            ["git", "reset", "--hard", "HEAD~1"]
        );
    }

    #[test]
    fn test_should_separate_paths() {
        let (repo, invoker) = stub_repository(StubInvoker::new());
        repo.reset().quiet().execute(None, &["a.txt", "b.txt"]).unwrap();
        assert_eq!(
            only_invocation(&invoker),
            ["git", "reset", "--quiet", "--", "a.txt", "b.txt"]
        );
    }
}
