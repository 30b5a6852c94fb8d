//! Fluent, one-shot command builders over the `git` executable.
//!
//! This crate does not implement any version-control logic. It assembles
//! argument lists for git subcommands, runs the configured executable and
//! hands back its trimmed output, parsed where the format is well defined:
//! - [`GitRepository`] is the entry point, one factory per subcommand
//! - [`CommandBuilder`] is the surface every builder shares (dry run,
//!   captured output, lifecycle stage)
//! - [`GitConfig`] holds the executable path, signing identities, logger and
//!   timeout
//! - [`GitError`] carries the command line, working directory and captured
//!   streams of a failed run
//!
//! ```no_run
//! use gitcmd::GitRepository;
//!
//! # fn main() -> Result<(), gitcmd::GitError> {
//! let repo = GitRepository::new("/srv/project");
//! let branches = repo.branch().all().get_names()?;
//! let status = repo.status().get_status()?;
//! # let _ = (branches, status);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod commands;
pub mod config;
pub mod errors;
pub mod invoker;
pub mod logger;
pub mod parse;
pub mod repository;
#[cfg(test)]
pub mod test_utils;

pub use builder::{CommandBuilder, CommandState, Stage};
pub use commands::*;
pub use config::GitConfig;
pub use errors::GitError;
pub use invoker::{Invocation, ProcessInvoker, ProcessOutput, StubInvoker, SystemInvoker};
pub use logger::{Logger, MemoryLogger, NullLogger, TracingLogger};
pub use repository::GitRepository;
