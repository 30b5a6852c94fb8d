//! Git-related error types.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Errors from building or running git commands.
#[derive(Debug, thiserror::Error)]
pub enum GitError {
    /// The builder holds no arguments at all.
    #[error("you must add command arguments before the process can build")]
    MalformedCommand,

    /// An argument can neither be quoted nor handed to a child process.
    #[error("git argument contains a NUL byte: {argument:?}")]
    InvalidArgument {
        /// The offending argument.
        argument: String,
    },

    /// The builder already ran its command once.
    #[error("command cannot be executed twice [{command_line}]")]
    AlreadyExecuted {
        /// Working directory of the builder.
        working_dir: PathBuf,
        /// The command line that would have run.
        command_line: String,
        /// Output captured by the earlier run, if any.
        output: Option<String>,
    },

    /// Git exited with a non-successful status.
    #[error(
        "could not execute git command [{command_line}]\nwork dir: {}\n{stderr}",
        .working_dir.display()
    )]
    CommandFailed {
        /// Working directory the command ran in.
        working_dir: PathBuf,
        /// Full command line.
        command_line: String,
        /// Raw standard output.
        stdout: String,
        /// Raw standard error.
        stderr: String,
        /// Process exit code, if the process was not killed by a signal.
        exit_code: Option<i32>,
    },

    /// The process could not be started.
    #[error(
        "could not start git command [{command_line}] in {}: {source}",
        .working_dir.display()
    )]
    Spawn {
        /// Working directory the command was meant to run in.
        working_dir: PathBuf,
        /// Full command line.
        command_line: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The process outlived the configured timeout and was killed.
    #[error("git command timed out after {}s [{command_line}]", .timeout.as_secs())]
    TimedOut {
        /// Working directory the command ran in.
        working_dir: PathBuf,
        /// Full command line.
        command_line: String,
        /// The limit that was exceeded.
        timeout: Duration,
    },

    /// Git binary not found.
    #[error("git executable not found in PATH")]
    NotFound,
}

impl GitError {
    /// Working directory of the failed command, when one was involved.
    pub fn working_dir(&self) -> Option<&Path> {
        match self {
            Self::AlreadyExecuted { working_dir, .. }
            | Self::CommandFailed { working_dir, .. }
            | Self::Spawn { working_dir, .. }
            | Self::TimedOut { working_dir, .. } => Some(working_dir),
            _ => None,
        }
    }

    /// Command line of the failed command, when one was assembled.
    pub fn command_line(&self) -> Option<&str> {
        match self {
            Self::AlreadyExecuted { command_line, .. }
            | Self::CommandFailed { command_line, .. }
            | Self::Spawn { command_line, .. }
            | Self::TimedOut { command_line, .. } => Some(command_line),
            _ => None,
        }
    }

    /// Captured standard output.
    pub fn stdout(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { stdout, .. } => Some(stdout),
            Self::AlreadyExecuted { output, .. } => output.as_deref(),
            _ => None,
        }
    }

    /// Captured standard error.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }

    /// Get the exit code if this was a command failure.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::CommandFailed { exit_code, .. } => *exit_code,
            _ => None,
        }
    }

    /// Check if this is an exit code 1 (typically "not found" for config).
    pub fn is_exit_code_1(&self) -> bool {
        self.exit_code() == Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command_failed(exit_code: Option<i32>) -> GitError {
        GitError::CommandFailed {
            working_dir: PathBuf::from("/srv/repo"),
            command_line: "git config --local user.name".to_string(),
            stdout: String::new(),
            stderr: "error: key does not exist".to_string(),
            exit_code,
        }
    }

    #[test]
    fn test_should_display_command_failed_with_context() {
        let msg = command_failed(Some(1)).to_string();
        assert_eq!(
            msg,
            "could not execute git command [git config --local user.name]\n\
             work dir: /srv/repo\n\
             error: key does not exist"
        );
    }

    #[test]
    fn test_should_expose_failure_record() {
        let err = command_failed(Some(1));
        assert_eq!(err.working_dir(), Some(Path::new("/srv/repo")));
        assert_eq!(err.command_line(), Some("git config --local user.name"));
        assert_eq!(err.stdout(), Some(""));
        assert_eq!(err.stderr(), Some("error: key does not exist"));
    }

    #[test]
    fn test_should_display_already_executed() {
        let err = GitError::AlreadyExecuted {
            working_dir: PathBuf::from("/srv/repo"),
            command_line: "git status".to_string(),
            output: Some("## main".to_string()),
        };
        assert!(err.to_string().contains("cannot be executed twice"));
        assert_eq!(err.stdout(), Some("## main"));
        assert!(err.stderr().is_none());
    }

    #[test]
    fn test_should_display_malformed_command() {
        let err = GitError::MalformedCommand;
        assert!(err.to_string().contains("command arguments"));
        assert!(err.command_line().is_none());
        assert!(err.working_dir().is_none());
    }

    #[test]
    fn test_should_display_spawn_error_with_source() {
        let err = GitError::Spawn {
            working_dir: PathBuf::from("/missing"),
            command_line: "git status".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/missing"));
        assert!(msg.contains("no such file"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_should_display_timed_out() {
        let err = GitError::TimedOut {
            working_dir: PathBuf::from("/srv/repo"),
            command_line: "git fetch".to_string(),
            timeout: Duration::from_secs(30),
        };
        assert!(err.to_string().contains("30s"));
    }

    #[test]
    fn test_should_display_not_found() {
        let err = GitError::NotFound;
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_should_return_exit_code() {
        assert_eq!(command_failed(Some(128)).exit_code(), Some(128));
        assert!(GitError::NotFound.exit_code().is_none());
    }

    #[test]
    fn test_should_detect_exit_code_1() {
        assert!(command_failed(Some(1)).is_exit_code_1());
        assert!(!command_failed(Some(128)).is_exit_code_1());
        assert!(!command_failed(None).is_exit_code_1());
    }
}
