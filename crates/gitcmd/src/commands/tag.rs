//! `git tag`.

use tracing::debug;

use crate::builder::{CommandState, impl_command_builder};
use crate::errors::GitError;
use crate::parse::name_list;
use crate::repository::GitRepository;

/// Creates, lists, deletes and verifies tags.
///
/// New tags are signed with the configured tag-signing identity unless the
/// builder chose a signer itself.
#[derive(Debug)]
pub struct TagCommandBuilder {
    state: CommandState,
    signer_chosen: bool,
}

impl_command_builder!(TagCommandBuilder);

impl TagCommandBuilder {
    pub(crate) fn new(repository: &GitRepository) -> Self {
        Self {
            state: CommandState::new(repository, "tag"),
            signer_chosen: false,
        }
    }

    /// Make an unsigned annotated tag.
    pub fn annotate(&mut self) -> &mut Self {
        self.state.arg("--annotate");
        self
    }

    /// Make a GPG-signed tag with the default key.
    pub fn sign(&mut self) -> &mut Self {
        self.signer_chosen = true;
        self.state.arg("--sign");
        self
    }

    /// Make a GPG-signed tag with `key_id`.
    pub fn local_user(&mut self, key_id: &str) -> &mut Self {
        self.signer_chosen = true;
        self.state.arg(format!("--local-user={key_id}"));
        self
    }

    /// Replace an existing tag.
    pub fn force(&mut self) -> &mut Self {
        self.state.arg("--force");
        self
    }

    /// Delete the named tag.
    pub fn delete(&mut self) -> &mut Self {
        self.state.arg("--delete");
        self
    }

    /// Verify the named tag's signature.
    pub fn verify(&mut self) -> &mut Self {
        self.state.arg("--verify");
        self
    }

    /// List tags, optionally filtered by the positional pattern.
    pub fn list(&mut self) -> &mut Self {
        self.state.arg("--list");
        self
    }

    /// Use `message` as the tag message.
    pub fn message(&mut self, message: &str) -> &mut Self {
        self.state.arg("-m");
        self.state.arg(message);
        self
    }

    /// Read the message from `path`.
    pub fn file(&mut self, path: &str) -> &mut Self {
        self.state.arg(format!("--file={path}"));
        self
    }

    /// Only list tags containing `commit`.
    pub fn contains(&mut self, commit: &str) -> &mut Self {
        self.state.arg("--contains");
        self.state.arg(commit);
        self
    }

    /// Only list tags pointing at `object`.
    pub fn points_at(&mut self, object: &str) -> &mut Self {
        self.state.arg("--points-at");
        self.state.arg(object);
        self
    }

    fn is_creating(&self) -> bool {
        !["--delete", "--verify", "--list"]
            .iter()
            .any(|flag| self.state.has_arg(flag))
    }

    /// Create (or delete, verify, list) tag `name` at `commit`, default `HEAD`.
    pub fn execute(&mut self, name: &str, commit: Option<&str>) -> Result<String, GitError> {
        if !self.signer_chosen
            && self.is_creating()
            && let Some(user) = self.state.config().sign_tag_user().map(String::from)
        {
            debug!(user = %user, tag = name, "signing tag with configured identity");
            self.state.arg(format!("--local-user={user}"));
            self.signer_chosen = true;
        }

        let mut positionals = vec![name.to_string()];
        positionals.extend(commit.map(String::from));
        self.state.run(positionals)
    }

    /// Run without a tag name and return the listed tags.
    pub fn get_names(&mut self) -> Result<Vec<String>, GitError> {
        Ok(name_list(&self.state.run(Vec::new())?))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::config::GitConfig;
    use crate::invoker::StubInvoker;
    use crate::test_utils::{only_invocation, stub_repository};

    #[test]
    fn test_should_create_lightweight_tag() {
        let (repo, invoker) = stub_repository(StubInvoker::new());
        repo.tag().execute("unit-test", None).unwrap();
        assert_eq!(only_invocation(&invoker), ["git", "tag", "unit-test"]);
    }

    #[test]
    fn test_should_create_annotated_tag_at_commit() {
        let (repo, invoker) = stub_repository(StubInvoker::new());
        repo.tag()
            .annotate()
            .message("release 1.0")
            .execute("v1.0", Some("abc1234"))
            .unwrap();
        assert_eq!(
            only_invocation(&invoker),
            ["git", "tag", "--annotate", "-m", "release 1.0", "v1.0", "abc1234"]
        );
    }

    #[test]
    fn test_should_sign_with_configured_identity() {
        let (repo, invoker) = stub_repository(StubInvoker::new());
        let repo = repo.with_config(GitConfig::new().with_sign_tags("tags@example.com"));
        repo.tag().message("signed").execute("v2.0", None).unwrap();
        assert_eq!(
            only_invocation(&invoker),
            ["git", "tag", "-m", "signed", "--local-user=tags@example.com", "v2.0"]
        );
    }

    #[test]
    fn test_should_not_sign_deletion() {
        let (repo, invoker) = stub_repository(StubInvoker::new());
        let repo = repo.with_config(GitConfig::new().with_sign_tags("tags@example.com"));
        repo.tag().delete().execute("v2.0", None).unwrap();
        assert_eq!(only_invocation(&invoker), ["git", "tag", "--delete", "v2.0"]);
    }

    #[test]
    fn test_should_prefer_explicit_signer() {
        let (repo, invoker) = stub_repository(StubInvoker::new());
        let repo = repo.with_config(GitConfig::new().with_sign_tags("tags@example.com"));
        repo.tag().local_user("OTHER").execute("v3.0", None).unwrap();
        assert_eq!(
            only_invocation(&invoker),
            ["git", "tag", "--local-user=OTHER", "v3.0"]
        );
    }

    #[test]
    fn test_should_list_tag_names() {
        let (repo, invoker) = stub_repository(StubInvoker::new().with_stdout("0.0.1\nannotated-tag\n"));
        let names = repo.tag().get_names().unwrap();
        assert_eq!(names, vec!["0.0.1", "annotated-tag"]);
        assert_eq!(only_invocation(&invoker), ["git", "tag"]);
    }
}
