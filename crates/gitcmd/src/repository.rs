//! Repository handle and builder factories.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::commands::{
    AddCommandBuilder, BranchCommandBuilder, CheckoutCommandBuilder, CloneCommandBuilder,
    CommitCommandBuilder, ConfigCommandBuilder, DescribeCommandBuilder, FetchCommandBuilder,
    InitCommandBuilder, LogCommandBuilder, LsRemoteCommandBuilder, MergeCommandBuilder,
    PullCommandBuilder, PushCommandBuilder, RemoteCommandBuilder, ResetCommandBuilder,
    RevParseCommandBuilder, RmCommandBuilder, ShortLogCommandBuilder, ShowCommandBuilder,
    StashCommandBuilder, StatusCommandBuilder, TagCommandBuilder,
};
use crate::config::GitConfig;
use crate::invoker::{ProcessInvoker, SystemInvoker};

/// A repository path plus the configuration and invoker its commands use.
///
/// Each factory method returns a fresh builder; builders are run once and
/// dropped.
#[derive(Debug, Clone)]
pub struct GitRepository {
    path: PathBuf,
    config: Arc<GitConfig>,
    invoker: Arc<dyn ProcessInvoker>,
}

impl GitRepository {
    /// Create a handle with default configuration and the system invoker.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(GitConfig::default()),
            invoker: Arc::new(SystemInvoker),
        }
    }

    /// Replace the configuration for builders created afterwards.
    #[must_use]
    pub fn with_config(mut self, config: GitConfig) -> Self {
        self.set_config(config);
        self
    }

    /// Replace the process invoker for builders created afterwards.
    #[must_use]
    pub fn with_invoker(mut self, invoker: Arc<dyn ProcessInvoker>) -> Self {
        self.invoker = invoker;
        self
    }

    /// Replace the configuration in place. Existing builders keep the old one.
    pub fn set_config(&mut self, config: GitConfig) {
        self.config = Arc::new(config);
    }

    /// Path to the repository's working tree.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The shared configuration.
    pub fn git_config(&self) -> &GitConfig {
        &self.config
    }

    pub(crate) fn shared_config(&self) -> Arc<GitConfig> {
        Arc::clone(&self.config)
    }

    pub(crate) fn invoker(&self) -> Arc<dyn ProcessInvoker> {
        Arc::clone(&self.invoker)
    }

    /// Whether the path contains a `.git` directory.
    pub fn is_initialized(&self) -> bool {
        self.path.join(".git").is_dir()
    }

    /// `git init`.
    pub fn init(&self) -> InitCommandBuilder {
        InitCommandBuilder::new(self)
    }

    /// `git clone` into this repository's path.
    pub fn clone_repository(&self) -> CloneCommandBuilder {
        CloneCommandBuilder::new(self)
    }

    /// `git config`.
    pub fn config(&self) -> ConfigCommandBuilder {
        ConfigCommandBuilder::new(self)
    }

    /// `git remote`.
    pub fn remote(&self) -> RemoteCommandBuilder {
        RemoteCommandBuilder::new(self)
    }

    /// `git branch`.
    pub fn branch(&self) -> BranchCommandBuilder {
        BranchCommandBuilder::new(self)
    }

    /// `git rev-parse`.
    pub fn rev_parse(&self) -> RevParseCommandBuilder {
        RevParseCommandBuilder::new(self)
    }

    /// `git describe`.
    pub fn describe(&self) -> DescribeCommandBuilder {
        DescribeCommandBuilder::new(self)
    }

    /// `git reset`.
    pub fn reset(&self) -> ResetCommandBuilder {
        ResetCommandBuilder::new(self)
    }

    /// `git checkout`.
    pub fn checkout(&self) -> CheckoutCommandBuilder {
        CheckoutCommandBuilder::new(self)
    }

    /// `git push`.
    pub fn push(&self) -> PushCommandBuilder {
        PushCommandBuilder::new(self)
    }

    /// `git fetch`.
    pub fn fetch(&self) -> FetchCommandBuilder {
        FetchCommandBuilder::new(self)
    }

    /// `git status`.
    pub fn status(&self) -> StatusCommandBuilder {
        StatusCommandBuilder::new(self)
    }

    /// `git add`.
    pub fn add(&self) -> AddCommandBuilder {
        AddCommandBuilder::new(self)
    }

    /// `git rm`.
    pub fn rm(&self) -> RmCommandBuilder {
        RmCommandBuilder::new(self)
    }

    /// `git commit`.
    pub fn commit(&self) -> CommitCommandBuilder {
        CommitCommandBuilder::new(self)
    }

    /// `git tag`.
    pub fn tag(&self) -> TagCommandBuilder {
        TagCommandBuilder::new(self)
    }

    /// `git show`.
    pub fn show(&self) -> ShowCommandBuilder {
        ShowCommandBuilder::new(self)
    }

    /// `git log`.
    pub fn log(&self) -> LogCommandBuilder {
        LogCommandBuilder::new(self)
    }

    /// `git shortlog`.
    pub fn short_log(&self) -> ShortLogCommandBuilder {
        ShortLogCommandBuilder::new(self)
    }

    /// `git ls-remote`.
    pub fn ls_remote(&self) -> LsRemoteCommandBuilder {
        LsRemoteCommandBuilder::new(self)
    }

    /// `git merge`.
    pub fn merge(&self) -> MergeCommandBuilder {
        MergeCommandBuilder::new(self)
    }

    /// `git pull`.
    pub fn pull(&self) -> PullCommandBuilder {
        PullCommandBuilder::new(self)
    }

    /// `git stash`.
    pub fn stash(&self) -> StashCommandBuilder {
        StashCommandBuilder::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CommandBuilder;
    use crate::invoker::StubInvoker;
    use crate::test_utils::stub_repository;

    #[test]
    fn test_should_report_path() {
        let repo = GitRepository::new("/srv/repo");
        assert_eq!(repo.path(), Path::new("/srv/repo"));
        assert_eq!(repo.git_config().executable(), "git");
    }

    #[test]
    fn test_should_detect_initialized_repository() {
        let dir = tempfile::tempdir().unwrap();
        let repo = GitRepository::new(dir.path());
        assert!(!repo.is_initialized());

        std::fs::create_dir(dir.path().join(".git")).unwrap();
        assert!(repo.is_initialized());
    }

    #[test]
    fn test_should_not_treat_git_file_as_initialized() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".git"), "gitdir: elsewhere").unwrap();
        assert!(!GitRepository::new(dir.path()).is_initialized());
    }

    #[test]
    fn test_should_hand_out_fresh_builders() {
        let (repo, _) = stub_repository(StubInvoker::new());
        assert_eq!(repo.init().arguments(), ["git", "init"]);
        assert_eq!(repo.clone_repository().arguments(), ["git", "clone"]);
        assert_eq!(repo.config().arguments(), ["git", "config"]);
        assert_eq!(repo.remote().arguments(), ["git", "remote"]);
        assert_eq!(repo.branch().arguments(), ["git", "branch"]);
        assert_eq!(repo.rev_parse().arguments(), ["git", "rev-parse"]);
        assert_eq!(repo.describe().arguments(), ["git", "describe"]);
        assert_eq!(repo.reset().arguments(), ["git", "reset"]);
        assert_eq!(repo.checkout().arguments(), ["git", "checkout"]);
        assert_eq!(repo.push().arguments(), ["git", "push"]);
        assert_eq!(repo.fetch().arguments(), ["git", "fetch"]);
        assert_eq!(repo.status().arguments(), ["git", "status"]);
        assert_eq!(repo.add().arguments(), ["git", "add"]);
        assert_eq!(repo.rm().arguments(), ["git", "rm"]);
        assert_eq!(repo.commit().arguments(), ["git", "commit"]);
        assert_eq!(repo.tag().arguments(), ["git", "tag"]);
        assert_eq!(repo.show().arguments(), ["git", "show"]);
        assert_eq!(repo.log().arguments(), ["git", "log"]);
        assert_eq!(repo.short_log().arguments(), ["git", "shortlog"]);
        assert_eq!(repo.ls_remote().arguments(), ["git", "ls-remote"]);
        assert_eq!(repo.merge().arguments(), ["git", "merge"]);
        assert_eq!(repo.pull().arguments(), ["git", "pull"]);
        assert_eq!(repo.stash().arguments(), ["git", "stash"]);
    }

    #[test]
    fn test_should_apply_config_to_later_builders_only() {
        let (mut repo, _) = stub_repository(StubInvoker::new());
        let before = repo.status();
        repo.set_config(GitConfig::new().with_executable("/opt/git"));
        let after = repo.status();

        assert_eq!(before.arguments()[0], "git");
        assert_eq!(after.arguments()[0], "/opt/git");
    }
}
