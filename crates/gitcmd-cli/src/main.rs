//! gitcmd - query a git repository through the gitcmd builders.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gitcmd::{CommandBuilder, GitConfig, GitRepository, TracingLogger};

mod exit_codes {
    pub const OK: i32 = 0;
    pub const ERROR: i32 = 1;
}

/// Inspect a git repository through one-shot command builders.
#[derive(Debug, Parser)]
#[command(name = "gitcmd", version, about)]
struct Cli {
    /// Working tree of the repository.
    #[arg(long, short = 'C', global = true, default_value = ".")]
    repo: PathBuf,

    /// Path of the git executable.
    #[arg(long, env = "GITCMD_GIT", global = true)]
    git: Option<String>,

    /// Print the git command line instead of running it.
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the status of each changed path.
    Status,
    /// List branch names.
    Branches {
        /// Include remote-tracking branches.
        #[arg(long)]
        all: bool,
    },
    /// List remote names.
    Remotes,
    /// List tag names.
    Tags,
    /// Read configuration values.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Name a commit after the nearest tag.
    Describe {
        /// Consider lightweight tags.
        #[arg(long)]
        tags: bool,
        /// Consider any ref.
        #[arg(long)]
        all: bool,
        /// Commit to describe (default HEAD).
        committish: Option<String>,
    },
    /// List commits.
    Log {
        /// Show at most this many commits.
        #[arg(long, short = 'n')]
        max_count: Option<u32>,
        /// Revision range (default HEAD).
        range: Option<String>,
    },
    /// Create an empty repository.
    Init {
        /// Create a bare repository.
        #[arg(long)]
        bare: bool,
        /// Name of the initial branch.
        #[arg(long)]
        initial_branch: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Print the value of a key.
    Get {
        /// Key, e.g. `user.name`.
        key: String,
        /// `local`, `global`, `system`, `worktree` or a file path.
        #[arg(long)]
        scope: Option<String>,
    },
    /// Print every key and value.
    List {
        /// `local`, `global`, `system`, `worktree` or a file path.
        #[arg(long)]
        scope: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("GITCMD_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = if let Some(cmd) = cli.command {
        let repo = repository(cli.repo, cli.git);
        match run_command(cmd, &repo, cli.dry_run) {
            Ok(()) => exit_codes::OK,
            Err(e) => {
                tracing::error!("{e:#}");
                exit_codes::ERROR
            }
        }
    } else {
        use clap::CommandFactory;
        Cli::command().print_help().ok();
        println!();
        exit_codes::OK
    };

    std::process::exit(exit_code);
}

fn repository(path: PathBuf, git: Option<String>) -> GitRepository {
    let mut config = GitConfig::new().with_logger(Arc::new(TracingLogger));
    if let Some(git) = git {
        config = config.with_executable(git);
    }
    GitRepository::new(path).with_config(config)
}

/// Print the command line when `dry_run` is set; otherwise hand the builder
/// to `run`.
fn dry_run_or<B: CommandBuilder>(
    builder: &mut B,
    dry_run: bool,
    render: impl FnOnce(&mut B) -> Result<String, gitcmd::GitError>,
    run: impl FnOnce(&mut B) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    if dry_run {
        builder.enable_dry_run();
        println!("{}", render(builder)?);
        Ok(())
    } else {
        run(builder)
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

fn run_command(cmd: Commands, repo: &GitRepository, dry_run: bool) -> anyhow::Result<()> {
    match cmd {
        Commands::Status => dry_run_or(
            &mut repo.status(),
            dry_run,
            |b| b.porcelain().execute(&[]),
            |b| {
                for (path, status) in b.get_status()? {
                    match status.original_path {
                        Some(ref from) => println!("{} {from} -> {path}", status.code()),
                        None => println!("{} {path}", status.code()),
                    }
                }
                Ok(())
            },
        ),
        Commands::Branches { all } => {
            let mut builder = repo.branch();
            if all {
                builder.all();
            }
            dry_run_or(
                &mut builder,
                dry_run,
                |b| b.execute(None),
                |b| {
                    print_lines(&b.get_names()?);
                    Ok(())
                },
            )
        }
        Commands::Remotes => dry_run_or(
            &mut repo.remote(),
            dry_run,
            gitcmd::RemoteCommandBuilder::execute,
            |b| {
                print_lines(&b.get_names()?);
                Ok(())
            },
        ),
        Commands::Tags => dry_run_or(
            &mut repo.tag(),
            dry_run,
            |b| b.get_names().map(|lines| lines.join("\n")),
            |b| {
                print_lines(&b.get_names()?);
                Ok(())
            },
        ),
        Commands::Config(ConfigCommand::Get { key, scope }) => {
            let mut builder = repo.config();
            if let Some(scope) = scope.as_deref() {
                builder.file(scope);
            }
            builder.get(&key, None);
            dry_run_or(
                &mut builder,
                dry_run,
                gitcmd::ConfigCommandBuilder::execute,
                |b| {
                    println!("{}", b.value()?);
                    Ok(())
                },
            )
        }
        Commands::Config(ConfigCommand::List { scope }) => {
            let mut builder = repo.config();
            if let Some(scope) = scope.as_deref() {
                builder.file(scope);
            }
            builder.list();
            dry_run_or(
                &mut builder,
                dry_run,
                gitcmd::ConfigCommandBuilder::execute,
                |b| {
                    for (key, value) in b.entries()? {
                        println!("{key}={value}");
                    }
                    Ok(())
                },
            )
        }
        Commands::Describe {
            tags,
            all,
            committish,
        } => {
            let mut builder = repo.describe();
            if tags {
                builder.tags();
            }
            if all {
                builder.all();
            }
            if dry_run {
                builder.enable_dry_run();
            }
            println!("{}", builder.execute(committish.as_deref())?);
            Ok(())
        }
        Commands::Log { max_count, range } => {
            let mut builder = repo.log();
            if let Some(n) = max_count {
                builder.max_count(n);
            }
            dry_run_or(
                &mut builder,
                dry_run,
                |b| b.commit_records().execute(range.as_deref(), &[]),
                |b| {
                    for commit in b.get_commits(range.as_deref())? {
                        let short = commit.sha.get(..7).unwrap_or(&commit.sha);
                        println!("{short} {}", commit.title);
                    }
                    Ok(())
                },
            )
        }
        Commands::Init {
            bare,
            initial_branch,
        } => {
            let mut builder = repo.init();
            if bare {
                builder.bare();
            }
            if let Some(name) = initial_branch.as_deref() {
                builder.initial_branch(name);
            }
            if dry_run {
                builder.enable_dry_run();
            }
            println!("{}", builder.execute()?);
            Ok(())
        }
    }
}
