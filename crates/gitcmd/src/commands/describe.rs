//! `git describe`.

use std::sync::LazyLock;

use regex::Regex;

use crate::builder::{CommandState, impl_command_builder};
use crate::errors::GitError;
use crate::repository::GitRepository;

static DESCRIBE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<tag>.+)-(?P<distance>\d+)-g(?P<hash>[0-9a-fA-F]+)$")
        .expect("DESCRIBE_RE is a valid regex")
});

/// A parsed `git describe` result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    /// Nearest reference name (or the bare hash under `--always`).
    pub tag: String,
    /// Commits between the reference and the described commit.
    pub distance: u32,
    /// Abbreviated hash of the described commit, absent on an exact match.
    pub abbrev_hash: Option<String>,
    /// Whether the working tree had local modifications.
    pub dirty: bool,
}

impl Description {
    /// Parse one line of describe output.
    pub fn parse(output: &str) -> Self {
        let line = output.trim();
        let (line, dirty) = match line.strip_suffix("-dirty") {
            Some(rest) => (rest, true),
            None => (line, false),
        };

        if let Some(caps) = DESCRIBE_RE.captures(line)
            && let Ok(distance) = caps["distance"].parse()
        {
            return Self {
                tag: caps["tag"].to_string(),
                distance,
                abbrev_hash: Some(caps["hash"].to_string()),
                dirty,
            };
        }

        Self {
            tag: line.to_string(),
            distance: 0,
            abbrev_hash: None,
            dirty,
        }
    }

    /// Whether the commit sits exactly on the reference.
    pub fn is_exact(&self) -> bool {
        self.distance == 0
    }
}

/// Names a commit after the nearest reachable tag.
#[derive(Debug)]
pub struct DescribeCommandBuilder {
    state: CommandState,
}

impl_command_builder!(DescribeCommandBuilder);

impl DescribeCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "describe"),
        }
    }

    /// Consider any ref, not just annotated tags.
    pub fn all(&mut self) -> &mut Self {
        self.state.arg("--all");
        self
    }

    /// Consider lightweight tags too.
    pub fn tags(&mut self) -> &mut Self {
        self.state.arg("--tags");
        self
    }

    /// Find the tag that comes after the commit instead.
    pub fn contains(&mut self) -> &mut Self {
        self.state.arg("--contains");
        self
    }

    /// Use `length` hex digits for the hash.
    pub fn abbrev(&mut self, length: u32) -> &mut Self {
        self.state.arg(format!("--abbrev={length}"));
        self
    }

    /// Consider up to `count` candidate tags.
    pub fn candidates(&mut self, count: u32) -> &mut Self {
        self.state.arg(format!("--candidates={count}"));
        self
    }

    /// Only succeed on an exact tag match.
    pub fn exact_match(&mut self) -> &mut Self {
        self.state.arg("--exact-match");
        self
    }

    /// Print search details to stderr.
    pub fn debug(&mut self) -> &mut Self {
        self.state.arg("--debug");
        self
    }

    /// Always print the long format.
    pub fn long(&mut self) -> &mut Self {
        self.state.arg("--long");
        self
    }

    /// Only consider tags matching `pattern`.
    pub fn match_pattern(&mut self, pattern: &str) -> &mut Self {
        self.state.arg(format!("--match={pattern}"));
        self
    }

    /// Fall back to the abbreviated hash when no tag is found.
    pub fn always(&mut self) -> &mut Self {
        self.state.arg("--always");
        self
    }

    /// Follow only first parents of merges.
    pub fn first_parent(&mut self) -> &mut Self {
        self.state.arg("--first-parent");
        self
    }

    /// Append `-dirty` when the working tree is modified.
    pub fn dirty(&mut self) -> &mut Self {
        self.state.arg("--dirty");
        self
    }

    /// Describe `committish`, or `HEAD` when absent.
    pub fn execute(&mut self, committish: Option<&str>) -> Result<String, GitError> {
        self.state.run(committish.map(String::from).into_iter().collect())
    }

    /// Run and parse the result.
    pub fn get_description(&mut self, committish: Option<&str>) -> Result<Description, GitError> {
        Ok(Description::parse(&self.execute(committish)?))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::builder::CommandBuilder;
    use crate::invoker::{ProcessOutput, StubInvoker};
    use crate::test_utils::{only_invocation, split, stub_repository};

    #[test]
    fn test_should_describe_with_lightweight_tags() {
        let (repo, invoker) = stub_repository(StubInvoker::new().with_stdout("0.0.1\n"));
        let out = repo.describe().tags().execute(None).unwrap();
        assert_eq!(out, "0.0.1");
        assert_eq!(only_invocation(&invoker), ["git", "describe", "--tags"]);
    }

    #[test]
    fn test_should_put_flags_before_committish() {
        let (repo, _) = stub_repository(StubInvoker::new());
        let line = repo
            .describe()
            .tags()
            .enable_dry_run()
            .execute(Some("HEAD^"))
            .unwrap();
        assert_eq!(split(&line), ["git", "describe", "--tags", "HEAD^"]);
    }

    #[test]
    fn test_should_describe_any_ref() {
        let (repo, invoker) = stub_repository(StubInvoker::new().with_stdout("heads/master\n"));
        let out = repo.describe().all().execute(None).unwrap();
        assert_eq!(out, "heads/master");
        assert_eq!(only_invocation(&invoker), ["git", "describe", "--all"]);
    }

    #[test]
    fn test_should_fail_without_annotated_tags() {
        let (repo, _) = stub_repository(StubInvoker::new().with_output(ProcessOutput::failure(
            128,
            "",
            "fatal: No annotated tags can describe 'abc'.\n",
        )));
        let err = repo.describe().execute(None).unwrap_err();
        assert_eq!(err.exit_code(), Some(128));
        assert!(err.stderr().unwrap_or_default().contains("No annotated tags"));
    }

    #[rstest]
    #[case("v1.2.0", "v1.2.0", 0, None, false)]
    #[case("v1.2.0-3-gabc1234", "v1.2.0", 3, Some("abc1234"), false)]
    #[case("release-2024-10-5-g0f0f0f0-dirty", "release-2024-10", 5, Some("0f0f0f0"), true)]
    #[case("v2-dirty", "v2", 0, None, true)]
    fn test_should_parse_description(
        #[case] raw: &str,
        #[case] tag: &str,
        #[case] distance: u32,
        #[case] hash: Option<&str>,
        #[case] dirty: bool,
    ) {
        let d = Description::parse(raw);
        assert_eq!(d.tag, tag);
        assert_eq!(d.distance, distance);
        assert_eq!(d.abbrev_hash.as_deref(), hash);
        assert_eq!(d.dirty, dirty);
    }

    #[test]
    fn test_should_parse_description_from_run() {
        let (repo, _) = stub_repository(StubInvoker::new().with_stdout("v0.3.0-12-g9fceb02\n"));
        let d = repo.describe().long().get_description(None).unwrap();
        assert_eq!(d.tag, "v0.3.0");
        assert!(!d.is_exact());
    }
}
