// src/notify/mod.rs

//! Notification channels.
//!
//! The batch coordinator is handed a capability flag saying whether the run
//! is interactively observed; it selects a channel accordingly and threads
//! it through to the resize collaborator's notification hook. The channel
//! implementations live here so the coordinator never branches on severity
//! itself:
//!
//! - [`LogNotifier`] routes everything onto `tracing` (unattended runs,
//!   uncapped).
//! - [`ConsoleNotifier`] renders severity-tagged lines for a human.
//! - [`CappedNotifier`] wraps a channel and delivers at most
//!   [`OK_NOTIFICATION_CAP`] routine messages per run, so an interactive run
//!   over a huge tree doesn't flood the operator with thousands of "ok"
//!   lines. Warnings and errors always pass through.

use std::fmt;

use tracing::{error, info, warn};

/// How many severities at or below [`Severity::Ok`] the user-visible
/// channel delivers per run.
pub const OK_NOTIFICATION_CAP: usize = 20;

/// Severity of one notification, ordered from routine to fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Notice,
    Info,
    Ok,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Notice => "notice",
            Severity::Info => "info",
            Severity::Ok => "ok",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}

/// Capability exposed to the resize collaborator for reporting per-file
/// outcomes without knowing whether the run is interactive or unattended.
pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity);
}

/// Durable log channel: maps severities onto `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Notice | Severity::Info | Severity::Ok => {
                info!(severity = %severity, "{message}");
            }
            Severity::Warning => warn!("{message}"),
            Severity::Error => error!("{message}"),
        }
    }
}

/// User-visible rendering: severity-tagged lines on stdout/stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Warning | Severity::Error => eprintln!("[{severity}] {message}"),
            _ => println!("[{severity}] {message}"),
        }
    }
}

/// Wraps a channel with an explicit per-run counter for routine messages.
///
/// The counter is owned state constructed fresh for every run; warnings and
/// errors are never counted or withheld.
#[derive(Debug)]
pub struct CappedNotifier<N: Notifier> {
    inner: N,
    cap: usize,
    ok_delivered: usize,
}

impl<N: Notifier> CappedNotifier<N> {
    pub fn new(inner: N) -> Self {
        Self::with_cap(inner, OK_NOTIFICATION_CAP)
    }

    pub fn with_cap(inner: N, cap: usize) -> Self {
        Self {
            inner,
            cap,
            ok_delivered: 0,
        }
    }

    /// Give the wrapped channel back (useful for inspecting a recording
    /// sink after a run).
    pub fn into_inner(self) -> N {
        self.inner
    }
}

impl<N: Notifier> Notifier for CappedNotifier<N> {
    fn notify(&mut self, message: &str, severity: Severity) {
        if severity <= Severity::Ok {
            if self.ok_delivered >= self.cap {
                return;
            }
            self.ok_delivered += 1;
        }
        self.inner.notify(message, severity);
    }
}

/// The channel an interactively-observed run reports through.
pub fn user_visible() -> CappedNotifier<ConsoleNotifier> {
    CappedNotifier::new(ConsoleNotifier)
}
