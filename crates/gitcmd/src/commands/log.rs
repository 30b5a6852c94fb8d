//! `git log`.

use std::sync::LazyLock;

use regex::Regex;

use crate::builder::{CommandState, impl_command_builder};
use crate::errors::GitError;
use crate::repository::GitRepository;

/// Format requested by [`LogCommandBuilder::get_commits`]: hash, subject and
/// body, each terminated by NUL.
const COMMIT_FORMAT: &str = "--pretty=format:%H%x00%s%x00%b%x00";

static COMMIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[0-9a-fA-F]{7,64}\x00.*?\x00[\S\s]*?\x00$")
        .expect("COMMIT_RE is a valid regex")
});

/// A commit as listed by [`LogCommandBuilder::get_commits`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Full hash.
    pub sha: String,
    /// Subject line.
    pub title: String,
    /// Message body without the subject.
    pub body: String,
}

/// Parse NUL-delimited log records.
pub(crate) fn parse_commits(output: &str) -> Vec<Commit> {
    COMMIT_RE
        .find_iter(output)
        .filter_map(|m| {
            let mut parts = m.as_str().split('\x00');
            Some(Commit {
                sha: parts.next()?.to_string(),
                title: parts.next()?.to_string(),
                body: parts.next()?.trim_end().to_string(),
            })
        })
        .collect()
}

/// Shows commit history.
#[derive(Debug)]
pub struct LogCommandBuilder {
    state: CommandState,
}

impl_command_builder!(LogCommandBuilder);

impl LogCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "log"),
        }
    }

    /// One line per commit.
    pub fn oneline(&mut self) -> &mut Self {
        self.state.arg("--oneline");
        self
    }

    /// Show at most `count` commits.
    pub fn max_count(&mut self, count: u32) -> &mut Self {
        self.state.arg(format!("--max-count={count}"));
        self
    }

    /// Skip the first `count` commits.
    pub fn skip(&mut self, count: u32) -> &mut Self {
        self.state.arg(format!("--skip={count}"));
        self
    }

    /// Only commits after `date`.
    pub fn since(&mut self, date: &str) -> &mut Self {
        self.state.arg(format!("--since={date}"));
        self
    }

    /// Only commits before `date`.
    pub fn until(&mut self, date: &str) -> &mut Self {
        self.state.arg(format!("--until={date}"));
        self
    }

    /// Only commits whose author matches `pattern`.
    pub fn author(&mut self, pattern: &str) -> &mut Self {
        self.state.arg(format!("--author={pattern}"));
        self
    }

    /// Only commits whose message matches `pattern`.
    pub fn grep(&mut self, pattern: &str) -> &mut Self {
        self.state.arg(format!("--grep={pattern}"));
        self
    }

    /// Use a named or custom pretty format.
    pub fn pretty(&mut self, format: &str) -> &mut Self {
        self.state.arg(format!("--pretty={format}"));
        self
    }

    /// Use a custom format string.
    pub fn format(&mut self, format: &str) -> &mut Self {
        self.state.arg(format!("--format={format}"));
        self
    }

    /// Follow only the first parent of merges.
    pub fn first_parent(&mut self) -> &mut Self {
        self.state.arg("--first-parent");
        self
    }

    /// Skip merge commits.
    pub fn no_merges(&mut self) -> &mut Self {
        self.state.arg("--no-merges");
        self
    }

    /// Oldest first.
    pub fn reverse(&mut self) -> &mut Self {
        self.state.arg("--reverse");
        self
    }

    /// Print NUL-delimited hash, subject and body records, the format
    /// [`get_commits`](Self::get_commits) parses.
    pub fn commit_records(&mut self) -> &mut Self {
        if !self.state.has_arg(COMMIT_FORMAT) {
            self.state.arg(COMMIT_FORMAT);
        }
        self
    }

    /// Show the history of `range` (default `HEAD`), limited to `paths`.
    pub fn execute(&mut self, range: Option<&str>, paths: &[&str]) -> Result<String, GitError> {
        let mut positionals: Vec<String> = range.map(String::from).into_iter().collect();
        if !paths.is_empty() {
            positionals.push("--".to_string());
            positionals.extend(paths.iter().map(|p| (*p).to_string()));
        }
        self.state.run(positionals)
    }

    /// List commits in `range` as structured records.
    pub fn get_commits(&mut self, range: Option<&str>) -> Result<Vec<Commit>, GitError> {
        self.commit_records();
        Ok(parse_commits(&self.execute(range, &[])?))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::invoker::StubInvoker;
    use crate::test_utils::{only_invocation, stub_repository};

    const SHA_A: &str = "6f1a0b3c9d8e7f6a5b4c3d2e1f0a9b8c7d6e5f4a";
    const SHA_B: &str = "0123456789abcdef0123456789abcdef01234567";

    #[test]
    fn test_should_parse_commit_records() {
        let raw = format!(
            "{SHA_A}\x00Add parser\x00Handles renames.\n\nRefs #12\n\x00\n{SHA_B}\x00Initial commit\x00\x00"
        );
        let commits = parse_commits(&raw);
        assert_eq!(
            commits,
            vec![
                Commit {
                    sha: SHA_A.to_string(),
                    title: "Add parser".to_string(),
                    body: "Handles renames.\n\nRefs #12".to_string(),
                },
                Commit {
                    sha: SHA_B.to_string(),
                    title: "Initial commit".to_string(),
                    body: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_should_return_no_commits_for_empty_history() {
        assert!(parse_commits("").is_empty());
    }

    #[test]
    fn test_should_request_nul_format_for_commit_list() {
        let (repo, invoker) = stub_repository(
            StubInvoker::new().with_stdout(format!("{SHA_B}\x00Initial commit\x00\x00")),
        );
        let commits = repo.log().max_count(5).get_commits(Some("main")).unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(
            only_invocation(&invoker),
            ["git", "log", "--max-count=5", COMMIT_FORMAT, "main"]
        );
    }

    #[test]
    fn test_should_limit_log_to_paths() {
        let (repo, invoker) = stub_repository(StubInvoker::new());
        repo.log().oneline().execute(None, &["src/lib.rs"]).unwrap();
        assert_eq!(
            only_invocation(&invoker),
            ["git", "log", "--oneline", "--", "src/lib.rs"]
        );
    }
}
