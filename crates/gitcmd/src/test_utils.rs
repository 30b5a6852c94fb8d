//! Shared test utilities for the builder tests.
//!
//! This module is only compiled in test builds (`#[cfg(test)]`).

use std::sync::Arc;

use crate::invoker::StubInvoker;
use crate::repository::GitRepository;

/// Path every stub repository pretends to live at.
pub const STUB_REPO_PATH: &str = "/srv/repo";

/// A repository at [`STUB_REPO_PATH`] whose commands go to `invoker`.
pub fn stub_repository(invoker: StubInvoker) -> (GitRepository, Arc<StubInvoker>) {
    let invoker = Arc::new(invoker);
    let repo = GitRepository::new(STUB_REPO_PATH).with_invoker(invoker.clone());
    (repo, invoker)
}

/// Split a rendered command line back into its tokens.
pub fn split(command_line: &str) -> Vec<String> {
    shlex::split(command_line)
        .unwrap_or_else(|| panic!("command line does not split: {command_line}"))
}

/// Tokens of the only invocation the stub recorded.
pub fn only_invocation(invoker: &StubInvoker) -> Vec<String> {
    let recorded = invoker.recorded();
    assert_eq!(recorded.len(), 1, "expected exactly one invocation");
    recorded[0].tokens().to_vec()
}
