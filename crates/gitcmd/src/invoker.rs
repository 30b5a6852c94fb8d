//! Child process invocation.
//!
//! [`ProcessInvoker`] is the only place the crate touches the operating
//! system's process API. [`SystemInvoker`] spawns real processes and
//! [`StubInvoker`] records invocations and replays scripted results.

use std::collections::VecDeque;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Output, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{instrument, trace};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// A fully assembled process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    tokens: Vec<String>,
    working_dir: PathBuf,
    timeout: Option<Duration>,
}

impl Invocation {
    /// Create an invocation. The first token is the program to run.
    pub fn new(tokens: Vec<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            tokens,
            working_dir: working_dir.into(),
            timeout: None,
        }
    }

    /// Limit how long the process may run.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The program to run.
    pub fn program(&self) -> &str {
        self.tokens.first().map_or("", String::as_str)
    }

    /// Arguments passed to the program.
    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or_default()
    }

    /// Program followed by its arguments.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Directory the process runs in.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Optional run time limit.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// The invocation as a single POSIX-shell-quoted line.
    pub fn command_line(&self) -> String {
        render_command_line(&self.tokens)
    }
}

/// Quote each token for a POSIX shell and join them with spaces.
///
/// Tokens holding a NUL byte cannot be quoted and are emitted verbatim.
pub fn render_command_line(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|token| match shlex::try_quote(token) {
            Ok(quoted) => quoted.into_owned(),
            Err(_) => token.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Standard output, lossily decoded.
    pub stdout: String,
    /// Standard error, lossily decoded.
    pub stderr: String,
    /// Exit code; `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    /// A successful run printing `stdout`.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            exit_code: Some(0),
        }
    }

    /// A failed run.
    pub fn failure(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code: Some(exit_code),
        }
    }

    /// Whether the process exited with status zero.
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

impl From<Output> for ProcessOutput {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        }
    }
}

/// Runs a process to completion and captures its output.
pub trait ProcessInvoker: Send + Sync + std::fmt::Debug {
    /// Run the invocation synchronously.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be started, or one of kind
    /// [`io::ErrorKind::TimedOut`] if it outlived the invocation's timeout.
    fn invoke(&self, invocation: &Invocation) -> io::Result<ProcessOutput>;
}

/// Invoker backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInvoker;

impl ProcessInvoker for SystemInvoker {
    #[instrument(skip(self), fields(command = %invocation.command_line()))]
    fn invoke(&self, invocation: &Invocation) -> io::Result<ProcessOutput> {
        let mut cmd = Command::new(invocation.program());
        cmd.args(invocation.args());

        if !invocation.working_dir().as_os_str().is_empty() {
            cmd.current_dir(invocation.working_dir());
        }

        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let output = match invocation.timeout() {
            Some(limit) => wait_with_timeout(cmd.spawn()?, limit)?,
            None => cmd.output()?,
        };

        let output = ProcessOutput::from(output);
        trace!(exit_code = ?output.exit_code, "git process finished");
        Ok(output)
    }
}

/// Wait for `child` and collect its output, giving up once `limit` elapses.
///
/// Both pipes are drained on their own threads while polling, so a child
/// that fills a pipe buffer still makes progress. The deadline also covers
/// collecting the output: a grandchild holding a pipe open past it still
/// yields [`io::ErrorKind::TimedOut`].
fn wait_with_timeout(mut child: Child, limit: Duration) -> io::Result<Output> {
    let deadline = Instant::now() + limit;
    let stdout = spawn_reader(child.stdout.take());
    let stderr = spawn_reader(child.stderr.take());

    let status = match poll_until(&mut child, deadline) {
        Ok(Some(status)) => status,
        Ok(None) => {
            reap(&mut child);
            return Err(timed_out(limit));
        }
        Err(e) => {
            reap(&mut child);
            return Err(e);
        }
    };

    Ok(Output {
        status,
        stdout: collect(&stdout, deadline, limit)?,
        stderr: collect(&stderr, deadline, limit)?,
    })
}

fn poll_until(child: &mut Child, deadline: Instant) -> io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

// The child may have exited between the last poll and the kill.
fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn timed_out(limit: Duration) -> io::Error {
    io::Error::new(
        io::ErrorKind::TimedOut,
        format!("process exceeded {}ms", limit.as_millis()),
    )
}

fn spawn_reader<R: Read + Send + 'static>(pipe: Option<R>) -> Receiver<io::Result<Vec<u8>>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        // The receiver is gone once the deadline passed.
        let _ = tx.send(drain(pipe));
    });
    rx
}

fn drain<R: Read>(pipe: Option<R>) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf)?;
    }
    Ok(buf)
}

fn collect(
    reader: &Receiver<io::Result<Vec<u8>>>,
    deadline: Instant,
    limit: Duration,
) -> io::Result<Vec<u8>> {
    match reader.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => Err(timed_out(limit)),
        Err(RecvTimeoutError::Disconnected) => {
            Err(io::Error::other("process output reader panicked"))
        }
    }
}

#[derive(Debug)]
enum StubResponse {
    Output(ProcessOutput),
    Error(io::ErrorKind),
}

/// Stub invoker for testing that records invocations instead of spawning.
///
/// Scripted responses are replayed in order; once they run out every
/// invocation succeeds with empty output.
#[derive(Debug, Default)]
pub struct StubInvoker {
    /// Invocations that were "run".
    pub invocations: Mutex<Vec<Invocation>>,
    responses: Mutex<VecDeque<StubResponse>>,
}

impl StubInvoker {
    /// Create a stub with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a process result.
    #[must_use]
    pub fn with_output(self, output: ProcessOutput) -> Self {
        self.lock_responses().push_back(StubResponse::Output(output));
        self
    }

    /// Queue a successful run printing `stdout`.
    #[must_use]
    pub fn with_stdout(self, stdout: impl Into<String>) -> Self {
        self.with_output(ProcessOutput::success(stdout))
    }

    /// Queue a failure to start the process.
    #[must_use]
    pub fn with_error(self, kind: io::ErrorKind) -> Self {
        self.lock_responses().push_back(StubResponse::Error(kind));
        self
    }

    /// Number of recorded invocations.
    pub fn invocation_count(&self) -> usize {
        self.lock_invocations().len()
    }

    /// Copy of the recorded invocations.
    pub fn recorded(&self) -> Vec<Invocation> {
        self.lock_invocations().clone()
    }

    fn lock_invocations(&self) -> std::sync::MutexGuard<'_, Vec<Invocation>> {
        self.invocations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, VecDeque<StubResponse>> {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProcessInvoker for StubInvoker {
    fn invoke(&self, invocation: &Invocation) -> io::Result<ProcessOutput> {
        self.lock_invocations().push(invocation.clone());
        match self.lock_responses().pop_front() {
            Some(StubResponse::Output(output)) => Ok(output),
            Some(StubResponse::Error(kind)) => Err(io::Error::new(kind, "stubbed invoker error")),
            None => Ok(ProcessOutput::success("")),
        }
    }
}
