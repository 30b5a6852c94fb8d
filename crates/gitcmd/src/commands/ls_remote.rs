//! `git ls-remote`.

use super::push::remote_and_refspecs;
use crate::builder::{CommandState, impl_command_builder};
use crate::errors::GitError;
use crate::repository::GitRepository;

/// A reference advertised by a remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ref {
    /// Object hash.
    pub hash: String,
    /// Full reference name, e.g. `refs/heads/main`.
    pub name: String,
}

pub(crate) fn parse_refs(output: &str) -> Vec<Ref> {
    output
        .lines()
        .filter_map(|line| {
            let (hash, name) = line.split_once('\t')?;
            Some(Ref {
                hash: hash.trim().to_string(),
                name: name.trim().to_string(),
            })
        })
        .collect()
}

/// Lists references in a remote repository.
#[derive(Debug)]
pub struct LsRemoteCommandBuilder {
    state: CommandState,
}

impl_command_builder!(LsRemoteCommandBuilder);

impl LsRemoteCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "ls-remote"),
        }
    }

    /// Only branches.
    pub fn heads(&mut self) -> &mut Self {
        self.state.arg("--heads");
        self
    }

    /// Only tags.
    pub fn tags(&mut self) -> &mut Self {
        self.state.arg("--tags");
        self
    }

    /// Skip peeled tags and pseudo-refs.
    pub fn refs(&mut self) -> &mut Self {
        self.state.arg("--refs");
        self
    }

    /// Path of `git-upload-pack` on the remote.
    pub fn upload_pack(&mut self, exec: &str) -> &mut Self {
        self.state.arg(format!("--upload-pack={exec}"));
        self
    }

    /// Exit with status 2 when nothing matched.
    pub fn exit_code(&mut self) -> &mut Self {
        self.state.arg("--exit-code");
        self
    }

    /// List refs of `repository` (default: the upstream) matching `patterns`.
    pub fn execute(&mut self, repository: Option<&str>, patterns: &[&str]) -> Result<String, GitError> {
        self.state.run(remote_and_refspecs(repository, patterns))
    }

    /// Like [`execute`](Self::execute), parsed into [`Ref`]s.
    pub fn get_refs(&mut self, repository: Option<&str>, patterns: &[&str]) -> Result<Vec<Ref>, GitError> {
        Ok(parse_refs(&self.execute(repository, patterns)?))
    }
}
