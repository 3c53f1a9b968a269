// File: src/validator.rs
// Purpose: Single-pass rule evaluation over a registration form

use std::collections::HashMap;
use tracing::debug;

use crate::fields::{
    get_value, FieldSource, ACCEPT_TERMS, CONFIRM_PASSWORD, EMAIL, PASSWORD, REQUIRED_FIELDS,
};
use crate::report::{InvalidationReporter, RecordingReporter, Violation};
use crate::rules::{check_password, is_valid_email};

/// Validate the form, reporting every violation.
///
/// Clears all previous markers first, then runs every rule without
/// short-circuiting:
///
/// 1. required fields (the consent checkbox by checked state)
/// 2. email shape, when an email was entered
/// 3. password length, then complexity, when a password was entered
/// 4. confirmation match, when both password and confirmation were entered
///
/// Returns `true` when no rule was violated.
pub fn validate<F, R>(form: &F, reporter: &mut R) -> bool
where
    F: FieldSource + ?Sized,
    R: InvalidationReporter + ?Sized,
{
    reporter.clear_all();
    let violations = run_rules(form, reporter);

    debug!(violations, "registration form validated");
    violations == 0
}

/// Evaluate every rule, returning the number of violations reported
fn run_rules<F, R>(form: &F, reporter: &mut R) -> usize
where
    F: FieldSource + ?Sized,
    R: InvalidationReporter + ?Sized,
{
    let mut violations = 0;
    let mut flag = |reporter: &mut R, field: &str, violation: Violation| {
        debug!(field, %violation, "registration field invalid");
        reporter.report(field, violation);
        violations += 1;
    };

    for &field in REQUIRED_FIELDS.iter() {
        if field == ACCEPT_TERMS {
            if !form.is_checked(field) {
                flag(&mut *reporter, field, Violation::ConsentNotGiven);
            }
        } else if get_value(form, field).is_empty() {
            flag(&mut *reporter, field, Violation::Required);
        }
    }

    let email = get_value(form, EMAIL);
    if !email.is_empty() && !is_valid_email(&email) {
        flag(&mut *reporter, EMAIL, Violation::InvalidEmail);
    }

    let password = get_value(form, PASSWORD);
    if !password.is_empty() {
        if let Err(violation) = check_password(&password) {
            flag(&mut *reporter, PASSWORD, violation);
        }
    }

    let confirmation = get_value(form, CONFIRM_PASSWORD);
    if !password.is_empty() && !confirmation.is_empty() && password != confirmation {
        flag(&mut *reporter, CONFIRM_PASSWORD, Violation::PasswordMismatch);
    }

    violations
}

/// Outcome of [`validate_collect`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Field names to messages
    pub errors: HashMap<String, Vec<String>>,
    /// Field that would receive focus
    pub first_invalid: Option<String>,
}

impl ValidationResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// First message reported for a field
    pub fn get_error(&self, field: &str) -> Option<&String> {
        self.errors.get(field).and_then(|errors| errors.first())
    }

    pub fn get_errors(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }
}

/// Run [`validate`] against an in-memory reporter and collect the markers
pub fn validate_collect<F: FieldSource + ?Sized>(form: &F) -> ValidationResult {
    let mut reporter = RecordingReporter::new();
    let is_valid = validate(form, &mut reporter);
    let first_invalid = reporter.first_invalid().map(str::to_string);

    ValidationResult {
        is_valid,
        errors: reporter.into_errors(),
        first_invalid,
    }
}
