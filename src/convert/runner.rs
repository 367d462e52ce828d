//! Invocation of the external converter process.

use std::ffi::OsString;
use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use wait_timeout::ChildExt;

use crate::convert::error::ConvertError;

/// The exact argument vector handed to the converter:
/// `<tool> -f <ext> -o <abs-output> <abs-input>`.
#[derive(Debug, Clone)]
pub struct ToolInvocation {
    program: PathBuf,
    args: Vec<OsString>,
}

/// Captured result of a converter run.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Exit code, or `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl ToolInvocation {
    pub fn new(program: &Path, format: &str, output: &Path, input: &Path) -> Self {
        let args = vec![
            OsString::from("-f"),
            OsString::from(format),
            OsString::from("-o"),
            output.as_os_str().to_os_string(),
            input.as_os_str().to_os_string(),
        ];
        Self {
            program: program.to_path_buf(),
            args,
        }
    }

    /// Spawn the converter, drain both output streams, and wait for it
    /// to terminate, bounded by `timeout` when one is given.
    pub fn run(&self, timeout: Option<Duration>) -> Result<ToolOutput, ConvertError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => ConvertError::ToolNotFound {
                    tool: self.program.clone(),
                },
                _ => ConvertError::Io(err),
            })?;

        // Drain on separate threads so a chatty converter cannot fill a
        // pipe and deadlock against the wait below.
        let stdout = spawn_reader(child.stdout.take());
        let stderr = spawn_reader(child.stderr.take());

        let status = match timeout {
            None => child.wait()?,
            Some(limit) => match child.wait_timeout(limit)? {
                Some(status) => status,
                None => {
                    child.kill().ok();
                    child.wait().ok();
                    join_reader(stdout);
                    join_reader(stderr);
                    return Err(ConvertError::TimedOut { limit });
                }
            },
        };

        Ok(ToolOutput {
            code: status.code(),
            stdout: join_reader(stdout),
            stderr: join_reader(stderr),
        })
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

fn spawn_reader<R: Read + Send + 'static>(stream: Option<R>) -> Option<thread::JoinHandle<Vec<u8>>> {
    stream.map(|mut stream| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            stream.read_to_end(&mut buf).ok();
            buf
        })
    })
}

fn join_reader(handle: Option<thread::JoinHandle<Vec<u8>>>) -> String {
    let bytes = handle.and_then(|h| h.join().ok()).unwrap_or_default();
    String::from_utf8_lossy(&bytes).to_string()
}
