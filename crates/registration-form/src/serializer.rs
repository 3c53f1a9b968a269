// File: src/serializer.rs
// Purpose: Map submittable form data into a UserRegistration record

use tracing::trace;

use crate::fields::{
    FieldSource, ACCEPT_TERMS, ADDRESS_CITY, ADDRESS_PROVINCE, ADDRESS_STREET, ADDRESS_ZIP,
    CONFIRM_PASSWORD, EMAIL, FIRST_NAME, LAST_NAME, PASSWORD, PHONE,
};
use crate::model::{Address, UserRegistration};

/// Build a record from the form's submittable data.
///
/// Values are taken as submitted (no trimming). This does not validate: on an
/// invalid form it still produces a best-effort record with empty or absent
/// members.
pub fn serialize<F: FieldSource + ?Sized>(form: &F) -> UserRegistration {
    let address = Address {
        street: optional(form, ADDRESS_STREET),
        city: optional(form, ADDRESS_CITY),
        zip: optional(form, ADDRESS_ZIP),
        province: optional(form, ADDRESS_PROVINCE),
    }
    .collapse();

    let record = UserRegistration {
        first_name: required(form, FIRST_NAME),
        last_name: required(form, LAST_NAME),
        email: required(form, EMAIL),
        phone: optional(form, PHONE),
        address,
        password: required(form, PASSWORD),
        confirm_password: optional(form, CONFIRM_PASSWORD),
        accept_terms: matches!(form.form_data(ACCEPT_TERMS).as_deref(), Some("on" | "true")),
    };

    trace!(
        has_address = record.address.is_some(),
        has_phone = record.phone.is_some(),
        accept_terms = record.accept_terms,
        "registration form serialized"
    );
    record
}

fn required<F: FieldSource + ?Sized>(form: &F, name: &str) -> String {
    form.form_data(name).unwrap_or_default()
}

fn optional<F: FieldSource + ?Sized>(form: &F, name: &str) -> Option<String> {
    form.form_data(name).filter(|value| !value.is_empty())
}
