//! ui::notify
//!
//! The notification surface the pipelines report through.
//!
//! A notice is a short title plus a description, tagged with a kind. The
//! console notifier prints notices to stderr; the recording notifier keeps
//! them for assertions.

use std::sync::Mutex;

use super::output::{self, Verbosity};

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Progress or success information
    Info,
    /// Informational warning that does not stop the operation
    Warning,
    /// Failure of the current attempt
    Error,
}

/// A user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, title, description)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, title, description)
    }

    fn new(kind: NoticeKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Receives notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Prints notices to the terminal.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleNotifier {
    verbosity: Verbosity,
}

impl ConsoleNotifier {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        let line = output::format_notice(&notice.title, &notice.description);
        match notice.kind {
            NoticeKind::Info => output::info(line, self.verbosity),
            NoticeKind::Warning => output::warn(line, self.verbosity),
            NoticeKind::Error => output::error(line),
        }
    }
}

/// Keeps every notice in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().map(|n| n.clone()).unwrap_or_default()
    }

    /// Titles of the notices received so far.
    pub fn titles(&self) -> Vec<String> {
        self.notices().into_iter().map(|n| n.title).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}
