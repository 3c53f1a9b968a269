// File: src/model.rs
// Purpose: Typed registration record produced by the serializer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Postal address entered on the form. Every part is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
}

impl Address {
    /// True when no part of the address carries a non-empty value
    pub fn is_empty(&self) -> bool {
        [&self.street, &self.city, &self.zip, &self.province]
            .iter()
            .all(|part| part.as_deref().map_or(true, str::is_empty))
    }

    /// Collapse an all-empty address into `None`
    pub fn collapse(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

/// Snapshot of a registration form, built fresh on every serialization.
///
/// Serializes with camelCase keys; absent optionals are omitted rather than
/// written as `null`.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistration {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default)]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
    #[serde(default)]
    pub accept_terms: bool,
}

impl UserRegistration {
    /// JSON form of the record, as handed to the output sink
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// Keeps passwords out of logs and panic messages.
impl fmt::Debug for UserRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRegistration")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("address", &self.address)
            .field("password", &"<redacted>")
            .field(
                "confirm_password",
                &self.confirm_password.as_ref().map(|_| "<redacted>"),
            )
            .field("accept_terms", &self.accept_terms)
            .finish()
    }
}
