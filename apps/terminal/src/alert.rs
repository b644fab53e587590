//! # Operator Alerts
//!
//! Severity-tagged notifications the engine hands to the presentation
//! layer. Every validation failure, advisory and submission outcome
//! resolves to one of these; none is fatal and the cart always remains in
//! a stable, editable state afterwards.

use std::fmt;

/// Notification severity, mirroring what a billing operator expects to
/// see: informational notices, success confirmations, advisory warnings
/// and hard errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Info,
    Success,
    /// Advisory — the triggering action still completed (or was skipped
    /// harmlessly).
    Warning,
    Error,
}

/// One operator-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub message: String,
}

impl Alert {
    pub fn info(message: impl Into<String>) -> Self {
        Alert {
            severity: AlertSeverity::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Alert {
            severity: AlertSeverity::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Alert {
            severity: AlertSeverity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Alert {
            severity: AlertSeverity::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            AlertSeverity::Info => "INFO",
            AlertSeverity::Success => "OK",
            AlertSeverity::Warning => "WARN",
            AlertSeverity::Error => "ERROR",
        };
        write!(f, "[{}] {}", tag, self.message)
    }
}
