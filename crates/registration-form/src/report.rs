// File: src/report.rs
// Purpose: Invalid-marker reporting contract and violation kinds

use std::collections::HashMap;
use thiserror::Error;

/// The ways a registration form can fail validation.
///
/// `Display` yields the message shown next to the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Violation {
    #[error("required field")]
    Required,
    #[error("required consent not given")]
    ConsentNotGiven,
    #[error("invalid email format")]
    InvalidEmail,
    #[error("minimum 8 characters")]
    PasswordTooShort,
    #[error("must contain an uppercase letter and a digit")]
    PasswordTooWeak,
    #[error("passwords do not match")]
    PasswordMismatch,
}

/// Receives invalid markers produced by a validation pass.
///
/// Implementations must tolerate unknown field names (no-op) and fields
/// without a place to show the message (flag only). `clear_all` must be
/// idempotent.
pub trait InvalidationReporter {
    /// Flag `field` as invalid, optionally with a message to display
    fn mark_invalid(&mut self, field: &str, message: Option<&str>);

    /// Remove every marker set so far
    fn clear_all(&mut self);

    fn report(&mut self, field: &str, violation: Violation) {
        self.mark_invalid(field, Some(&violation.to_string()));
    }
}

/// Reporter that keeps markers in memory, in the order they were set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingReporter {
    reports: Vec<(String, Option<String>)>,
    clears: usize,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(String, Option<String>)] {
        &self.reports
    }

    /// Number of times `clear_all` has been called
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    pub fn is_marked(&self, field: &str) -> bool {
        self.reports.iter().any(|(name, _)| name == field)
    }

    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.reports
            .iter()
            .filter(|(name, _)| name == field)
            .filter_map(|(_, message)| message.as_deref())
            .collect()
    }

    /// The field that receives focus after a failed pass
    pub fn first_invalid(&self) -> Option<&str> {
        self.reports.first().map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Field names to messages, in reporting order per field
    pub fn into_errors(self) -> HashMap<String, Vec<String>> {
        let mut errors: HashMap<String, Vec<String>> = HashMap::new();
        for (field, message) in self.reports {
            let messages = errors.entry(field).or_default();
            if let Some(message) = message {
                messages.push(message);
            }
        }
        errors
    }
}

impl InvalidationReporter for RecordingReporter {
    fn mark_invalid(&mut self, field: &str, message: Option<&str>) {
        self.reports
            .push((field.to_string(), message.map(str::to_string)));
    }

    fn clear_all(&mut self) {
        self.reports.clear();
        self.clears += 1;
    }
}
