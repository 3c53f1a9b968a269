//! Registration form handling
//!
//! Validates a registration form against a fixed rule set and serializes
//! valid input into a [`UserRegistration`] record. The form itself is reached
//! through the [`FieldSource`] capability and feedback is delivered through an
//! [`InvalidationReporter`], so the same logic runs against a browser form
//! (see the `registration-form-wasm` crate) or an in-memory [`MemoryForm`].
//!
//! ```rust
//! use registration_form::{serialize, validate, MemoryForm, RecordingReporter};
//!
//! let form = MemoryForm::new()
//!     .text("firstName", "Anna")
//!     .text("lastName", "Rossi")
//!     .text("email", "anna@rossi.it")
//!     .text("address.street", "Via Roma 1")
//!     .text("address.city", "Roma")
//!     .text("password", "Password1")
//!     .text("confirmPassword", "Password1")
//!     .checkbox("acceptTerms", true);
//!
//! let mut reporter = RecordingReporter::new();
//! assert!(validate(&form, &mut reporter));
//!
//! let record = serialize(&form);
//! assert_eq!(record.first_name, "Anna");
//! assert!(record.accept_terms);
//! ```

pub mod config;
pub mod error;
pub mod fields;
pub mod model;
pub mod report;
pub mod rules;
pub mod serializer;
pub mod validator;

pub use config::FormConfig;
pub use error::ConfigError;
pub use fields::{get_value, FieldSource, MemoryForm};
pub use model::{Address, UserRegistration};
pub use report::{InvalidationReporter, RecordingReporter, Violation};
pub use serializer::serialize;
pub use validator::{validate, validate_collect, ValidationResult};
