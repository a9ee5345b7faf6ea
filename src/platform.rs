//! Clipboard and notification facilities.
//!
//! The controller only talks to the [`Clipboard`] and [`Notifier`] traits.
//! The terminal front end plugs in [`SystemClipboard`] and
//! [`ConsoleNotifier`]; tests use the in-memory recorders.

use anyhow::{bail, Result};
use std::env;
use std::process::Command;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, error, info};

use crate::util::pipe_to_command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Transient user feedback. Fire-and-forget.
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);
}

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Prints notices to stderr with a status glyph.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => {
                info!(notice = message, "success");
                eprintln!("  \u{2713} {}", message);
            }
            Severity::Error => {
                error!(notice = message, "error");
                eprintln!("  \u{2717} {}", message);
            }
        }
    }
}

/// Copies through the platform's command-line clipboard tool.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl SystemClipboard {
    /// Pick the clipboard tool for the current platform.
    pub fn detect() -> Result<Self> {
        let (program, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
            ("pbcopy", &[])
        } else if cfg!(windows) {
            ("clip", &[])
        } else if env::var_os("WAYLAND_DISPLAY").is_some() {
            ("wl-copy", &[])
        } else if env::var_os("DISPLAY").is_some() {
            x11_tool(on_path)
        } else {
            bail!("No clipboard available (no display server detected)")
        };
        debug!("Using clipboard tool: {}", program);
        Ok(Self::with_command(program, args))
    }

    pub fn with_command(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            timeout: Duration::from_secs(5),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

/// `xclip` when installed, else `xsel`. Falls back to `xclip` so the
/// write error names a real tool.
fn x11_tool(installed: impl Fn(&str) -> bool) -> (&'static str, &'static [&'static str]) {
    if installed("xclip") {
        ("xclip", &["-selection", "clipboard"])
    } else if installed("xsel") {
        ("xsel", &["--clipboard", "--input"])
    } else {
        ("xclip", &["-selection", "clipboard"])
    }
}

fn on_path(program: &str) -> bool {
    env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).any(|dir| dir.join(program).is_file()))
        .unwrap_or(false)
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        pipe_to_command(cmd, text, self.timeout)
    }
}

/// Stand-in when no system clipboard exists: the text goes to stdout.
#[derive(Debug, Default)]
pub struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        println!("{}", text);
        Ok(())
    }
}

/// Keeps every write in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    writes: Arc<Mutex<Vec<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        if let Ok(mut writes) = self.writes.lock() {
            writes.push(text.to_string());
        }
        Ok(())
    }
}

/// Records notices instead of showing them. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<(Severity, String)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<(Severity, String)> {
        self.notices.lock().map(|n| n.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<(Severity, String)> {
        self.notices().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push((severity, message.to_string()));
        }
    }
}
