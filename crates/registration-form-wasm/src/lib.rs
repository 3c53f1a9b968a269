//! Registration form in the browser
//!
//! WebAssembly bindings that wire `registration-form` to a page: the form is
//! read through [`DomForm`], feedback goes through [`DomReporter`], and a
//! successful submit publishes the serialized record.
//!
//! # Example (JavaScript)
//! ```javascript
//! import init, { RegistrationForm } from './registration_form_wasm.js';
//!
//! await init();
//! const form = new RegistrationForm({ formId: 'signup', toastDurationMs: 5000 });
//! form.attach();
//! document.getElementById('signup')
//!     .addEventListener('registration:submit', (e) => console.log(e.detail));
//! ```

use std::cell::Cell;
use std::rc::Rc;

use registration_form::{serialize, validate, FormConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;

pub mod dom_form;
pub mod dom_report;
pub mod error;
pub mod logging;
pub mod page;

#[cfg(test)]
mod test_dom;

pub use dom_form::DomForm;
pub use dom_report::DomReporter;
pub use error::GlueError;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Parse a JS options object; `undefined` or `null` means defaults
pub fn parse_options(options: JsValue) -> Result<FormConfig, GlueError> {
    if options.is_undefined() || options.is_null() {
        return Ok(FormConfig::default());
    }
    Ok(serde_wasm_bindgen::from_value(options)?)
}

/// A registration form on the current page
#[wasm_bindgen]
pub struct RegistrationForm {
    form: DomForm,
    config: Rc<FormConfig>,
    attached: Cell<bool>,
}

#[wasm_bindgen]
impl RegistrationForm {
    /// Resolve the form named by `options.formId` (default `registration-form`)
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<RegistrationForm, JsValue> {
        let config = parse_options(options)?;
        logging::init(&config.log_level);

        let document = page::document()?;
        let form = page::find_form(&document, &config.form_id)?;

        Ok(RegistrationForm {
            form: DomForm::new(form),
            config: Rc::new(config),
            attached: Cell::new(false),
        })
    }

    /// Wire submit handling and password toggles. Repeated calls are no-ops.
    pub fn attach(&self) -> Result<(), JsValue> {
        if self.attached.get() {
            tracing::debug!(form_id = %self.config.form_id, "registration form already attached");
            return Ok(());
        }

        let document = page::document()?;
        page::attach_password_toggles(&document, &self.form, &self.config)?;
        page::attach_submit(self.form.clone(), Rc::clone(&self.config))?;
        self.attached.set(true);
        tracing::info!(form_id = %self.config.form_id, "registration form attached");
        Ok(())
    }

    /// Run a validation pass, decorating invalid fields
    pub fn validate(&self) -> bool {
        let mut reporter = DomReporter::new(&self.form, &self.config);
        let valid = validate(&self.form, &mut reporter);
        if !valid && self.config.focus_first_error {
            reporter.focus_first_invalid();
        }
        valid
    }

    /// Current form state as a plain JS object (no validation)
    pub fn serialize(&self) -> Result<JsValue, JsValue> {
        let record = serialize(&self.form);
        serde_wasm_bindgen::to_value(&record).map_err(|err| GlueError::from(err).into())
    }
}

/// Attach to `#registration-form` with default settings once the DOM is
/// ready. Pages without that form are left alone.
#[wasm_bindgen(js_name = autoInit)]
pub fn auto_init() -> Result<(), JsValue> {
    let document = page::document()?;

    if document.ready_state() == "loading" {
        let handler = Closure::once_into_js(move |_event: Event| {
            if let Err(err) = attach_default() {
                tracing::warn!(%err, "auto-init failed");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", handler.unchecked_ref())?;
        return Ok(());
    }

    attach_default().map_err(JsValue::from)
}

fn attach_default() -> Result<(), GlueError> {
    let config = FormConfig::default();
    logging::init(&config.log_level);

    let document = page::document()?;
    let form = match page::find_form(&document, &config.form_id) {
        Ok(form) => DomForm::new(form),
        Err(GlueError::FormNotFound(id)) => {
            tracing::debug!(form_id = %id, "no registration form on page");
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    page::attach_password_toggles(&document, &form, &config)?;
    page::attach_submit(form, Rc::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_options_are_defaults() {
        assert_eq!(parse_options(JsValue::UNDEFINED).unwrap(), FormConfig::default());
        assert_eq!(parse_options(JsValue::NULL).unwrap(), FormConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_options_override() {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"formId".into(), &"signup".into()).unwrap();
        js_sys::Reflect::set(&options, &"focusFirstError".into(), &false.into()).unwrap();

        let config = parse_options(options.into()).unwrap();
        assert_eq!(config.form_id, "signup");
        assert!(!config.focus_first_error);
        assert_eq!(config.invalid_class, "is-invalid");
    }

    #[wasm_bindgen_test]
    fn test_bad_options_are_rejected() {
        let err = parse_options(JsValue::from_str("signup")).unwrap_err();
        assert!(matches!(err, GlueError::Convert(_)));
    }

    #[wasm_bindgen_test]
    fn test_attach_twice_handles_submit_once() {
        let form = test_dom::mount_form(
            "attach-twice",
            r#"<input name="firstName" value="Anna">
               <input name="lastName" value="Rossi">
               <input name="email" value="anna@rossi.it">
               <input name="address.street" value="Via Roma 1">
               <input name="address.city" value="Roma">
               <input name="password" value="Password1">
               <input name="confirmPassword" value="Password1">
               <input type="checkbox" name="acceptTerms" checked>"#,
        );

        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"formId".into(), &"attach-twice".into()).unwrap();
        js_sys::Reflect::set(&options, &"logPayload".into(), &false.into()).unwrap();
        let registration = RegistrationForm::new(options.into()).unwrap();
        registration.attach().unwrap();
        registration.attach().unwrap();

        let published = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&published);
        let listener = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            counter.set(counter.get() + 1);
        });
        form.add_event_listener_with_callback(page::SUBMIT_EVENT, listener.as_ref().unchecked_ref())
            .unwrap();

        let submit = Event::new("submit").unwrap();
        form.dispatch_event(&submit).unwrap();

        assert_eq!(published.get(), 1);
    }

    #[wasm_bindgen_test]
    fn test_password_toggle_type() {
        assert_eq!(page::toggled_input_type("password"), "text");
        assert_eq!(page::toggled_input_type("text"), "password");
        assert_eq!(page::toggled_input_type("PASSWORD"), "text");
    }
}
