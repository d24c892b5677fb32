//! User-facing notification fan-out.
//!
//! The core never renders toasts itself; it hands messages to whatever
//! [`Notifier`] the shell installed. Notifications are fire-and-forget: no
//! return value, no retry.

use anyhow::Error;

/// Sink for user-visible messages
pub trait Notifier {
    /// Report a failed operation with its underlying cause
    fn report_error(&self, message: &str, cause: &Error);

    /// Report a completed operation
    fn report_success(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn report_error(&self, message: &str, cause: &Error) {
        (**self).report_error(message, cause);
    }

    fn report_success(&self, message: &str) {
        (**self).report_success(message);
    }
}

/// Notifier that routes everything to the log facade.
///
/// Useful for headless runs and tests; UI shells install their own
/// toast-backed implementation instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn report_error(&self, message: &str, cause: &Error) {
        log::error!("{}: {}", message, cause);
    }

    fn report_success(&self, message: &str) {
        log::info!("{}", message);
    }
}
