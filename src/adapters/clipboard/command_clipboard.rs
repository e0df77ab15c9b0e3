//! Clipboard adapter that pipes text into an external program
//! (`pbcopy`, `wl-copy`, `xclip -selection clipboard`, ...).

use std::io::Write;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::ports::{Clipboard, ClipboardError};

/// How long a clipboard program may run before the copy counts as failed.
pub const DEFAULT_COPY_TIMEOUT: Duration = Duration::from_secs(2);

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Copies by running a configured command and writing to its stdin.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            timeout: DEFAULT_COPY_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds from a whitespace-separated command line. Returns `None` if blank.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Clipboard for CommandClipboard {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // stdin must be closed before waiting or the program never exits.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = self.wait_bounded(&mut child)?;
        if !status.success() {
            return Err(ClipboardError::Failed(format!(
                "{} exited with {}",
                self.program, status
            )));
        }
        written?;

        tracing::debug!(program = %self.program, "Copied {} bytes to clipboard", text.len());
        Ok(())
    }
}

impl CommandClipboard {
    /// Waits for the program to exit, killing it once the timeout passes.
    fn wait_bounded(&self, child: &mut Child) -> Result<ExitStatus, ClipboardError> {
        let deadline = Instant::now() + self.timeout;
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                // Already-exited races are fine; reap either way.
                let _ = child.kill();
                let _ = child.wait();
                return Err(ClipboardError::Failed(format!(
                    "{} did not exit within {:?}",
                    self.program, self.timeout
                )));
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}
