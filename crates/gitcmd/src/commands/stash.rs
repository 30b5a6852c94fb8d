//! `git stash`.

use std::sync::LazyLock;

use regex::Regex;

use crate::builder::{CommandState, impl_command_builder};
use crate::errors::GitError;
use crate::repository::GitRepository;

static STASH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<reference>stash@\{(?P<index>\d+)\}):\s*(?P<description>.*)$")
        .expect("STASH_RE is a valid regex")
});

/// One entry of `git stash list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StashEntry {
    /// Position in the stack, 0 being the newest.
    pub index: usize,
    /// Reference name, e.g. `stash@{0}`.
    pub reference: String,
    /// Rest of the line, e.g. `WIP on main: abc1234 subject`.
    pub description: String,
}

pub(crate) fn parse_stash_list(output: &str) -> Vec<StashEntry> {
    output
        .lines()
        .filter_map(|line| {
            let caps = STASH_RE.captures(line.trim())?;
            Some(StashEntry {
                index: caps["index"].parse().ok()?,
                reference: caps["reference"].to_string(),
                description: caps["description"].to_string(),
            })
        })
        .collect()
}

/// Shelves and restores local changes.
///
/// Pick the stash action first (`push`, `pop`, ...), then its options.
#[derive(Debug)]
pub struct StashCommandBuilder {
    state: CommandState,
}

impl_command_builder!(StashCommandBuilder);

impl StashCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "stash"),
        }
    }

    fn action(&mut self, action: &str, stash: Option<&str>) -> &mut Self {
        self.state.arg(action);
        if let Some(s) = stash {
            self.state.arg(s);
        }
        self
    }

    /// Save local changes.
    pub fn push(&mut self) -> &mut Self {
        self.action("push", None)
    }

    /// Describe the stash with `message`.
    pub fn message(&mut self, message: &str) -> &mut Self {
        self.state.arg("--message");
        self.state.arg(message);
        self
    }

    /// Stash untracked files as well.
    pub fn include_untracked(&mut self) -> &mut Self {
        self.state.arg("--include-untracked");
        self
    }

    /// Leave staged changes in the index.
    pub fn keep_index(&mut self) -> &mut Self {
        self.state.arg("--keep-index");
        self
    }

    /// Apply and drop `stash` (default the newest).
    pub fn pop(&mut self, stash: Option<&str>) -> &mut Self {
        self.action("pop", stash)
    }

    /// Apply `stash` without dropping it.
    pub fn apply(&mut self, stash: Option<&str>) -> &mut Self {
        self.action("apply", stash)
    }

    /// Drop `stash`.
    pub fn drop(&mut self, stash: Option<&str>) -> &mut Self {
        self.action("drop", stash)
    }

    /// List stashes.
    pub fn list(&mut self) -> &mut Self {
        self.action("list", None)
    }

    /// Remove every stash.
    pub fn clear(&mut self) -> &mut Self {
        self.action("clear", None)
    }

    /// Show the changes recorded in `stash`.
    pub fn show(&mut self, stash: Option<&str>) -> &mut Self {
        self.action("show", stash)
    }

    /// Run the configured action (`push` when none was chosen).
    pub fn execute(&mut self) -> Result<String, GitError> {
        self.state.run(Vec::new())
    }

    /// Run `git stash list` and parse the entries.
    pub fn get_list(&mut self) -> Result<Vec<StashEntry>, GitError> {
        if !self.state.has_arg("list") {
            self.list();
        }
        Ok(parse_stash_list(&self.execute()?))
    }
}
