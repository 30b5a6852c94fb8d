//! `git status`, including the porcelain parser.

use std::collections::BTreeMap;
use std::fmt;

use crate::builder::{CommandState, impl_command_builder, owned};
use crate::errors::GitError;
use crate::parse::unquote_path;
use crate::repository::GitRepository;

/// One side of a porcelain status pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// ` `
    Unmodified,
    /// `M`
    Modified,
    /// `T`
    TypeChanged,
    /// `A`
    Added,
    /// `D`
    Deleted,
    /// `R`
    Renamed,
    /// `C`
    Copied,
    /// `U`
    UpdatedButUnmerged,
    /// `?`
    Untracked,
    /// `!`
    Ignored,
    /// Anything git may add later.
    Unknown(char),
}

impl From<char> for StatusCode {
    fn from(c: char) -> Self {
        match c {
            ' ' => Self::Unmodified,
            'M' => Self::Modified,
            'T' => Self::TypeChanged,
            'A' => Self::Added,
            'D' => Self::Deleted,
            'R' => Self::Renamed,
            'C' => Self::Copied,
            'U' => Self::UpdatedButUnmerged,
            '?' => Self::Untracked,
            '!' => Self::Ignored,
            other => Self::Unknown(other),
        }
    }
}

impl StatusCode {
    /// The character git prints for this state.
    pub fn as_char(self) -> char {
        match self {
            Self::Unmodified => ' ',
            Self::Modified => 'M',
            Self::TypeChanged => 'T',
            Self::Added => 'A',
            Self::Deleted => 'D',
            Self::Renamed => 'R',
            Self::Copied => 'C',
            Self::UpdatedButUnmerged => 'U',
            Self::Untracked => '?',
            Self::Ignored => '!',
            Self::Unknown(c) => c,
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Index and worktree state of one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    /// State in the index (staged).
    pub index: StatusCode,
    /// State in the working tree (unstaged).
    pub worktree: StatusCode,
    /// Source path of a rename or copy.
    pub original_path: Option<String>,
}

impl FileStatus {
    /// A status with no rename source.
    pub fn new(index: StatusCode, worktree: StatusCode) -> Self {
        Self {
            index,
            worktree,
            original_path: None,
        }
    }

    /// The two-character code as git prints it, e.g. `"A "` or `"??"`.
    pub fn code(&self) -> String {
        format!("{}{}", self.index, self.worktree)
    }

    /// Whether both sides report a conflict state.
    pub fn is_conflicted(&self) -> bool {
        matches!(
            (self.index, self.worktree),
            (StatusCode::UpdatedButUnmerged, _)
                | (_, StatusCode::UpdatedButUnmerged)
                | (StatusCode::Added, StatusCode::Added)
                | (StatusCode::Deleted, StatusCode::Deleted)
        )
    }
}

/// Parse `git status --porcelain` (v1) output into a path-keyed map.
///
/// Renames and copies are keyed by their new path. The `## branch` header
/// printed with `--branch` is not a path and is skipped, as are blank or
/// truncated lines.
pub fn parse_porcelain(output: &str) -> BTreeMap<String, FileStatus> {
    let mut files = BTreeMap::new();
    for line in output.lines() {
        if line.starts_with("## ") {
            continue;
        }
        let mut chars = line.chars();
        let (Some(x), Some(y)) = (chars.next(), chars.next()) else {
            continue;
        };
        let Some(rest) = line.get(3..).filter(|r| !r.is_empty()) else {
            continue;
        };

        let mut status = FileStatus::new(x.into(), y.into());
        let renamed = matches!(
            status.index,
            StatusCode::Renamed | StatusCode::Copied
        ) || matches!(status.worktree, StatusCode::Renamed | StatusCode::Copied);

        let path = match rest.split_once(" -> ") {
            Some((from, to)) if renamed => {
                status.original_path = Some(unquote_path(from));
                unquote_path(to)
            }
            _ => unquote_path(rest),
        };
        files.insert(path, status);
    }
    files
}

/// Shows the working tree status.
#[derive(Debug)]
pub struct StatusCommandBuilder {
    state: CommandState,
}

impl_command_builder!(StatusCommandBuilder);

impl StatusCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "status"),
        }
    }

    /// Short format.
    pub fn short(&mut self) -> &mut Self {
        self.state.arg("--short");
        self
    }

    /// Show branch and tracking info.
    pub fn branch(&mut self) -> &mut Self {
        self.state.arg("--branch");
        self
    }

    /// Stable, script-friendly format.
    pub fn porcelain(&mut self) -> &mut Self {
        self.state.arg("--porcelain");
        self
    }

    /// Long format (the default).
    pub fn long(&mut self) -> &mut Self {
        self.state.arg("--long");
        self
    }

    /// Control untracked file listing: `no`, `normal` or `all`.
    pub fn untracked_files(&mut self, mode: &str) -> &mut Self {
        self.state.arg(format!("--untracked-files={mode}"));
        self
    }

    /// Ignore submodule changes: `none`, `untracked`, `dirty` or `all`.
    pub fn ignore_submodules(&mut self, when: &str) -> &mut Self {
        self.state.arg(format!("--ignore-submodules={when}"));
        self
    }

    /// Show ignored files too.
    pub fn ignored(&mut self) -> &mut Self {
        self.state.arg("--ignored");
        self
    }

    /// Run, limited to `paths` when given.
    pub fn execute(&mut self, paths: &[&str]) -> Result<String, GitError> {
        let mut positionals = Vec::new();
        if !paths.is_empty() {
            positionals.push("--".to_string());
            positionals.extend(owned(paths));
        }
        self.state.run(positionals)
    }

    /// Run in porcelain format and return the status of each path.
    pub fn get_status(&mut self) -> Result<BTreeMap<String, FileStatus>, GitError> {
        if !self.state.has_arg("--porcelain") {
            self.porcelain();
        }
        Ok(parse_porcelain(&self.execute(&[])?))
    }
}
