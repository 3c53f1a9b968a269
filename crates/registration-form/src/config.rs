// File: src/config.rs
// Purpose: Page-level settings for wiring the form (ids, classes, toast)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Settings the browser glue uses to find and decorate the form.
///
/// Every field has a default, so an empty TOML document or JS object is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    /// `id` of the registration `<form>` element
    pub form_id: String,

    /// Class added to invalid controls
    pub invalid_class: String,

    /// Selector of the feedback region next to a control
    pub feedback_selector: String,

    /// Class that makes a feedback region visible
    pub feedback_visible_class: String,

    pub toast_id: String,

    pub toast_duration_ms: u32,

    pub success_message: String,

    pub error_message: String,

    /// Selector of password-visibility toggle buttons
    pub password_toggle_selector: String,

    /// Move focus to the first invalid control after a failed submit
    pub focus_first_error: bool,

    /// Log the serialized record to the console
    pub log_payload: bool,

    /// Maximum `tracing` level: "error", "warn", "info", "debug" or "trace"
    pub log_level: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: "registration-form".to_string(),
            invalid_class: "is-invalid".to_string(),
            feedback_selector: ".invalid-feedback".to_string(),
            feedback_visible_class: "d-block".to_string(),
            toast_id: "form-toast".to_string(),
            toast_duration_ms: 3000,
            success_message: "Registration data is valid".to_string(),
            error_message: "Please correct the highlighted fields".to_string(),
            password_toggle_selector: "[data-toggle-password]".to_string(),
            focus_first_error: true,
            log_payload: true,
            log_level: "info".to_string(),
        }
    }
}

impl FormConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
