//! `git config`.
//!
//! Single-value lookups return git's output as is; multi-value lookups are
//! split into lines. Value patterns are handed to git, which does the
//! filtering.

use std::fmt;

use crate::builder::{CommandState, impl_command_builder};
use crate::errors::GitError;
use crate::parse::{key_value_list, name_list};
use crate::repository::GitRepository;

/// Which configuration file an operation reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigScope {
    /// `.git/config` of the repository.
    Local,
    /// The user's `~/.gitconfig`.
    Global,
    /// The system-wide `$(prefix)/etc/gitconfig`.
    System,
    /// `.git/config.worktree`.
    Worktree,
    /// An explicit file.
    File(String),
}

impl From<&str> for ConfigScope {
    fn from(s: &str) -> Self {
        match s {
            "local" => Self::Local,
            "global" => Self::Global,
            "system" => Self::System,
            "worktree" => Self::Worktree,
            path => Self::File(path.to_string()),
        }
    }
}

/// Type constraint applied to values read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigType {
    /// `true` / `false`.
    Bool,
    /// Decimal number with optional `k`/`m`/`g` suffix.
    Int,
    /// Either of the above.
    BoolOrInt,
    /// Path with `~` expansion.
    Path,
    /// Date, printed as a timestamp.
    ExpiryDate,
    /// Color, printed as an ANSI sequence.
    Color,
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::BoolOrInt => "bool-or-int",
            Self::Path => "path",
            Self::ExpiryDate => "expiry-date",
            Self::Color => "color",
        };
        f.write_str(name)
    }
}

/// Reads and writes configuration values.
#[derive(Debug)]
pub struct ConfigCommandBuilder {
    state: CommandState,
}

impl_command_builder!(ConfigCommandBuilder);

impl ConfigCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "config"),
        }
    }

    /// Operate on `scope`. Accepts `"local"`, `"global"`, `"system"`,
    /// `"worktree"` or a file path.
    pub fn file(&mut self, scope: impl Into<ConfigScope>) -> &mut Self {
        match scope.into() {
            ConfigScope::Local => self.state.arg("--local"),
            ConfigScope::Global => self.state.arg("--global"),
            ConfigScope::System => self.state.arg("--system"),
            ConfigScope::Worktree => self.state.arg("--worktree"),
            ConfigScope::File(path) => {
                self.state.arg("--file");
                self.state.arg(path);
            }
        }
        self
    }

    /// Read configuration from a blob instead of a file.
    pub fn blob(&mut self, blob: &str) -> &mut Self {
        self.state.arg("--blob");
        self.state.arg(blob);
        self
    }

    /// Enforce a value type.
    pub fn value_type(&mut self, value_type: ConfigType) -> &mut Self {
        self.state.arg(format!("--type={value_type}"));
        self
    }

    /// Prefix each value with the file it came from.
    pub fn show_origin(&mut self) -> &mut Self {
        self.state.arg("--show-origin");
        self
    }

    /// Add a value without replacing existing ones.
    pub fn add(&mut self, name: &str, value: &str) -> &mut Self {
        self.state.arg("--add");
        self.state.arg(name);
        self.state.arg(value);
        self
    }

    /// Replace every value of `name`, optionally only those matching `value_regex`.
    pub fn replace_all(&mut self, name: &str, value: &str, value_regex: Option<&str>) -> &mut Self {
        self.state.arg("--replace-all");
        self.state.arg(name);
        self.state.arg(value);
        self.push_optional(value_regex);
        self
    }

    /// Read one value of `name`.
    pub fn get(&mut self, name: &str, value_regex: Option<&str>) -> &mut Self {
        self.state.arg("--get");
        self.state.arg(name);
        self.push_optional(value_regex);
        self
    }

    /// Read every value of `name`.
    pub fn get_all(&mut self, name: &str, value_regex: Option<&str>) -> &mut Self {
        self.state.arg("--get-all");
        self.state.arg(name);
        self.push_optional(value_regex);
        self
    }

    /// Read every `name value` pair whose name matches `name_regex`.
    pub fn get_regexp(&mut self, name_regex: &str, value_regex: Option<&str>) -> &mut Self {
        self.state.arg("--get-regexp");
        self.state.arg(name_regex);
        self.push_optional(value_regex);
        self
    }

    /// Read the value of `name` best matching `url`.
    pub fn get_url_match(&mut self, name: &str, url: &str) -> &mut Self {
        self.state.arg("--get-urlmatch");
        self.state.arg(name);
        self.state.arg(url);
        self
    }

    /// Remove one value of `name`.
    pub fn unset(&mut self, name: &str, value_regex: Option<&str>) -> &mut Self {
        self.state.arg("--unset");
        self.state.arg(name);
        self.push_optional(value_regex);
        self
    }

    /// Remove every value of `name`.
    pub fn unset_all(&mut self, name: &str, value_regex: Option<&str>) -> &mut Self {
        self.state.arg("--unset-all");
        self.state.arg(name);
        self.push_optional(value_regex);
        self
    }

    /// Rename a section.
    pub fn rename_section(&mut self, old_name: &str, new_name: &str) -> &mut Self {
        self.state.arg("--rename-section");
        self.state.arg(old_name);
        self.state.arg(new_name);
        self
    }

    /// Remove a section.
    pub fn remove_section(&mut self, name: &str) -> &mut Self {
        self.state.arg("--remove-section");
        self.state.arg(name);
        self
    }

    /// List every variable with its value.
    pub fn list(&mut self) -> &mut Self {
        self.state.arg("--list");
        self
    }

    fn push_optional(&mut self, value: Option<&str>) {
        if let Some(v) = value {
            self.state.arg(v);
        }
    }

    /// Run the configured operation.
    pub fn execute(&mut self) -> Result<String, GitError> {
        self.state.run(Vec::new())
    }

    /// Read `name` (the implicit form of `--get`).
    pub fn lookup(&mut self, name: &str) -> Result<String, GitError> {
        self.state.run(vec![name.to_string()])
    }

    /// Write `value` to `name`.
    pub fn set(&mut self, name: &str, value: &str) -> Result<String, GitError> {
        self.state.run(vec![name.to_string(), value.to_string()])
    }

    /// Run and return the single value printed.
    pub fn value(&mut self) -> Result<String, GitError> {
        self.execute()
    }

    /// Run and return every value printed, one per line.
    pub fn values(&mut self) -> Result<Vec<String>, GitError> {
        Ok(name_list(&self.execute()?))
    }

    /// Run and return `(name, value)` pairs.
    ///
    /// `--get-regexp` output separates them with a space, `--list` output
    /// with `=`.
    pub fn entries(&mut self) -> Result<Vec<(String, String)>, GitError> {
        let separator = if self.state.has_arg("--get-regexp") {
            ' '
        } else {
            '='
        };
        Ok(key_value_list(&self.execute()?, separator))
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

    #[rstest]
    #[case("local", &["--local"])]
    #[case("global", &["--global"])]
    #[case("system", &["--system"])]
    #[case("worktree", &["--worktree"])]
    #[case("/etc/custom.conf", &["--file", "/etc/custom.conf"])]
    fn test_should_map_scope_to_flags(#[case] scope: &str, #[case] expected: &[&str]) {
        let (repo, _) = stub_repository(StubInvoker::new());
        let mut cmd = repo.config();
        cmd.file(scope);
        assert_eq!(&cmd.arguments()[2..], expected);
    }

    #[test]
    fn test_should_lookup_scoped_key() {
        let (repo, invoker) = stub_repository(StubInvoker::new().with_stdout("false\n"));
        let value = repo.config().file("local").lookup("core.bare").unwrap();
        assert_eq!(value, "false");
        assert_eq!(
            only_invocation(&invoker),
            ["git", "config", "--local", "core.bare"]
        );
    }

    #[test]
    fn test_should_get_single_value() {
        let (repo, invoker) = stub_repository(StubInvoker::new().with_stdout("Jane Doe\n"));
        let value = repo
            .config()
            .file(ConfigScope::Local)
            .get("user.name", None)
            .value()
            .unwrap();
        assert_eq!(value, "Jane Doe");
        assert_eq!(
            only_invocation(&invoker),
            ["git", "config", "--local", "--get", "user.name"]
        );
    }

    #[test]
    fn test_should_set_value() {
        let (repo, invoker) = stub_repository(StubInvoker::new());
        repo.config()
            .file("local")
            .set("user.name", "Jane Doe 2")
            .unwrap();
        assert_eq!(
            only_invocation(&invoker),
            ["git", "config", "--local", "user.name", "Jane Doe 2"]
        );
    }

    #[test]
    fn test_should_add_value() {
        let (repo, _) = stub_repository(StubInvoker::new());
        let line = repo
            .config()
            .file("local")
            .add("user.name", "Jane Doe 2")
            .enable_dry_run()
            .execute()
            .unwrap();
        assert_eq!(
            split(&line),
            ["git", "config", "--local", "--add", "user.name", "Jane Doe 2"]
        );
    }

    #[test]
    fn test_should_pass_value_filter_to_git() {
        let (repo, invoker) = stub_repository(StubInvoker::new().with_stdout("ab234\nac345\n"));
        let values = repo
            .config()
            .file("local")
            .get_all("gitcmd.multi", Some("^a.+3.+$"))
            .values()
            .unwrap();

        assert_eq!(values, vec!["ab234", "ac345"]);
        assert_eq!(
            only_invocation(&invoker),
            [
                "git",
                "config",
                "--local",
                "--get-all",
                "gitcmd.multi",
                "^a.+3.+$"
            ]
        );
    }

    #[test]
    fn test_should_split_multi_values_like_name_lists() {
        let (repo, _) = stub_repository(StubInvoker::new().with_stdout("aa123\n ab234\n\nac345\nbb234\n"));
        let values = repo
            .config()
            .get_all("gitcmd.multi", None)
            .values()
            .unwrap();
        assert_eq!(values, vec!["aa123", "ab234", "ac345", "bb234"]);
    }

    #[test]
    fn test_should_parse_list_entries() {
        let (repo, _) = stub_repository(
            StubInvoker::new().with_stdout("core.bare=false\nuser.name=Jane Doe\n"),
        );
        let entries = repo.config().file("local").list().entries().unwrap();
        assert_eq!(
            entries,
            vec![
                ("core.bare".to_string(), "false".to_string()),
                ("user.name".to_string(), "Jane Doe".to_string()),
            ]
        );
    }

    #[test]
    fn test_should_parse_get_regexp_entries() {
        let (repo, _) = stub_repository(
            StubInvoker::new().with_stdout("remote.origin.url /tmp/git\nremote.origin.fetch +refs/heads/*:refs/remotes/origin/*\n"),
        );
        let entries = repo
            .config()
            .get_regexp(r"^remote\.origin\.", None)
            .entries()
            .unwrap();
        assert_eq!(entries[0], ("remote.origin.url".to_string(), "/tmp/git".to_string()));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_should_surface_missing_key_as_command_failure() {
        let (repo, _) = stub_repository(
            StubInvoker::new().with_output(ProcessOutput::failure(1, "", "")),
        );
        let err = repo
            .config()
            .file("local")
            .get("user.name", None)
            .execute()
            .unwrap_err();

        assert!(err.is_exit_code_1());
        assert_eq!(
            err.command_line(),
            Some("git config --local --get user.name")
        );
    }

    #[test]
    fn test_should_render_type_and_section_operations() {
        let (repo, _) = stub_repository(StubInvoker::new());
        let line = repo
            .config()
            .value_type(ConfigType::BoolOrInt)
            .rename_section("old", "new")
            .enable_dry_run()
            .execute()
            .unwrap();
        assert_eq!(
            split(&line),
            ["git", "config", "--type=bool-or-int", "--rename-section", "old", "new"]
        );
    }

    #[test]
    fn test_should_convert_scope_names() {
        assert_eq!(ConfigScope::from("global"), ConfigScope::Global);
        assert_eq!(
            ConfigScope::from("./team.gitconfig"),
            ConfigScope::File("./team.gitconfig".to_string())
        );
    }
}
