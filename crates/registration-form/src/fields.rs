// File: src/fields.rs
// Purpose: Named-field source capability and the trimmed read path

use std::collections::HashMap;

pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const ADDRESS_STREET: &str = "address.street";
pub const ADDRESS_CITY: &str = "address.city";
pub const ADDRESS_ZIP: &str = "address.zip";
pub const ADDRESS_PROVINCE: &str = "address.province";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";
pub const ACCEPT_TERMS: &str = "acceptTerms";

/// Fields that must be filled in, in reporting order
pub const REQUIRED_FIELDS: [&str; 8] = [
    FIRST_NAME,
    LAST_NAME,
    EMAIL,
    ADDRESS_STREET,
    ADDRESS_CITY,
    PASSWORD,
    CONFIRM_PASSWORD,
    ACCEPT_TERMS,
];

/// Value a checked checkbox submits when it has no value attribute
pub const DEFAULT_CHECKBOX_VALUE: &str = "on";

/// A form-like structure exposing controls by name.
///
/// Implemented once per environment: over a live `HtmlFormElement` in the
/// browser, over [`MemoryForm`] everywhere else.
pub trait FieldSource {
    /// Current value of the named control, untrimmed. `None` when no such
    /// control exists.
    fn control_value(&self, name: &str) -> Option<String>;

    /// Checked state of a checkbox-like control. `false` when missing.
    fn is_checked(&self, name: &str) -> bool;

    /// Value the named control would contribute to a submission.
    ///
    /// Unchecked checkboxes and missing controls contribute nothing.
    fn form_data(&self, name: &str) -> Option<String>;
}

/// Trimmed value of a named control, or an empty string if the control is
/// missing or has no value.
///
/// Trims what a browser's `String.prototype.trim` trims: Unicode whitespace
/// plus the byte-order mark.
pub fn get_value<F: FieldSource + ?Sized>(form: &F, name: &str) -> String {
    form.control_value(name)
        .map(|value| value.trim_matches(is_trimmed).to_string())
        .unwrap_or_default()
}

fn is_trimmed(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Control {
    Text(String),
    Checkbox { checked: bool, value: Option<String> },
}

/// Owned, in-memory form. Adding a control under an existing name replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryForm {
    controls: HashMap<String, Control>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text-like control (input, select, textarea)
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_text(name, value);
        self
    }

    /// Add a checkbox without a value attribute
    pub fn checkbox(mut self, name: impl Into<String>, checked: bool) -> Self {
        self.controls.insert(
            name.into(),
            Control::Checkbox {
                checked,
                value: None,
            },
        );
        self
    }

    /// Add a checkbox carrying an explicit value attribute
    pub fn checkbox_with_value(
        mut self,
        name: impl Into<String>,
        checked: bool,
        value: impl Into<String>,
    ) -> Self {
        self.controls.insert(
            name.into(),
            Control::Checkbox {
                checked,
                value: Some(value.into()),
            },
        );
        self
    }

    pub fn set_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.controls.insert(name.into(), Control::Text(value.into()));
    }

    /// Toggle a checkbox. Returns false if `name` is not a checkbox.
    pub fn set_checked(&mut self, name: &str, checked: bool) -> bool {
        match self.controls.get_mut(name) {
            Some(Control::Checkbox { checked: state, .. }) => {
                *state = checked;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.controls.remove(name).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.controls.contains_key(name)
    }
}

/// Builds a form of text controls from decoded `(name, value)` pairs, such as
/// an urlencoded request body. The consent field is treated as a checkbox that
/// is checked because it was submitted.
impl<K, V> FromIterator<(K, V)> for MemoryForm
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = MemoryForm::new();
        for (name, value) in iter {
            let name = name.into();
            if name == ACCEPT_TERMS {
                form = form.checkbox_with_value(name, true, value);
            } else {
                form.set_text(name, value);
            }
        }
        form
    }
}

impl FieldSource for MemoryForm {
    fn control_value(&self, name: &str) -> Option<String> {
        match self.controls.get(name)? {
            Control::Text(value) => Some(value.clone()),
            Control::Checkbox { value, .. } => Some(
                value
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CHECKBOX_VALUE.to_string()),
            ),
        }
    }

    fn is_checked(&self, name: &str) -> bool {
        matches!(
            self.controls.get(name),
            Some(Control::Checkbox { checked: true, .. })
        )
    }

    fn form_data(&self, name: &str) -> Option<String> {
        match self.controls.get(name)? {
            Control::Text(value) => Some(value.clone()),
            Control::Checkbox { checked: false, .. } => None,
            Control::Checkbox {
                checked: true,
                value,
            } => Some(
                value
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CHECKBOX_VALUE.to_string()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_value_trims() {
        let form = MemoryForm::new().text(FIRST_NAME, "  Anna \t");
        assert_eq!(get_value(&form, FIRST_NAME), "Anna");
    }

    #[test]
    fn test_get_value_missing_control() {
        let form = MemoryForm::new();
        assert_eq!(get_value(&form, "nope"), "");
    }

    #[test]
    fn test_get_value_whitespace_only_is_empty() {
        let form = MemoryForm::new().text(LAST_NAME, "   ");
        assert_eq!(get_value(&form, LAST_NAME), "");
    }

    #[test]
    fn test_get_value_trims_byte_order_mark() {
        let form = MemoryForm::new()
            .text(FIRST_NAME, "\u{FEFF}")
            .text(LAST_NAME, "\u{FEFF} Rossi\u{00A0}");

        assert_eq!(get_value(&form, FIRST_NAME), "");
        assert_eq!(get_value(&form, LAST_NAME), "Rossi");
    }

    #[test]
    fn test_checkbox_form_data() {
        let form = MemoryForm::new()
            .checkbox("plain", true)
            .checkbox("off", false)
            .checkbox_with_value("valued", true, "true");

        assert_eq!(form.form_data("plain").as_deref(), Some("on"));
        assert_eq!(form.form_data("off"), None);
        assert_eq!(form.form_data("valued").as_deref(), Some("true"));
        assert!(form.is_checked("plain"));
        assert!(!form.is_checked("off"));
    }

    #[test]
    fn test_text_control_is_never_checked() {
        let form = MemoryForm::new().text(ACCEPT_TERMS, "on");
        assert!(!form.is_checked(ACCEPT_TERMS));
        assert_eq!(form.form_data(ACCEPT_TERMS).as_deref(), Some("on"));
    }

    #[test]
    fn test_set_checked() {
        let mut form = MemoryForm::new()
            .checkbox(ACCEPT_TERMS, false)
            .text(EMAIL, "a@b.c");

        assert!(form.set_checked(ACCEPT_TERMS, true));
        assert!(form.is_checked(ACCEPT_TERMS));
        assert!(!form.set_checked(EMAIL, true));
        assert!(!form.set_checked("missing", true));
    }

    #[test]
    fn test_from_pairs() {
        let form: MemoryForm = vec![(FIRST_NAME, "Anna"), (ACCEPT_TERMS, "on")]
            .into_iter()
            .collect();

        assert_eq!(get_value(&form, FIRST_NAME), "Anna");
        assert!(form.is_checked(ACCEPT_TERMS));
        assert!(!form.contains(EMAIL));
    }

    #[test]
    fn test_form_data_untrimmed() {
        let form = MemoryForm::new().text(ADDRESS_STREET, " Via Roma 1 ");
        assert_eq!(form.form_data(ADDRESS_STREET).as_deref(), Some(" Via Roma 1 "));
    }
}
