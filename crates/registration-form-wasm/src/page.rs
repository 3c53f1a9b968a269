// File: src/page.rs
// Purpose: Submit handling, toast and password toggles for one form

use std::rc::Rc;

use registration_form::{serialize, validate, FormConfig, UserRegistration};
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, CustomEventInit, Document, Event, HtmlFormElement, HtmlInputElement};

use crate::dom_form::DomForm;
use crate::dom_report::{select_all, DomReporter};
use crate::error::GlueError;

/// Name of the event dispatched on the form with the record as `detail`
pub const SUBMIT_EVENT: &str = "registration:submit";

/// Attribute on toggle buttons naming the password input's `id`
pub const TOGGLE_TARGET_ATTR: &str = "data-toggle-password";

pub fn document() -> Result<Document, GlueError> {
    web_sys::window()
        .ok_or(GlueError::NoWindow)?
        .document()
        .ok_or(GlueError::NoDocument)
}

pub fn find_form(document: &Document, id: &str) -> Result<HtmlFormElement, GlueError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| GlueError::FormNotFound(id.to_string()))?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| GlueError::NotAForm(id.to_string()))
}

/// Validate and, on success, serialize. Decorates the page either way.
pub fn run_submit(form: &DomForm, config: &FormConfig) -> Option<UserRegistration> {
    let mut reporter = DomReporter::new(form, config);
    if !validate(form, &mut reporter) {
        if config.focus_first_error {
            reporter.focus_first_invalid();
        }
        show_toast(config, &config.error_message, true);
        return None;
    }

    let record = serialize(form);
    show_toast(config, &config.success_message, false);
    Some(record)
}

/// Hand the record to the page: console log and a bubbling custom event
pub fn publish(form: &DomForm, config: &FormConfig, record: &UserRegistration) -> Result<(), GlueError> {
    if config.log_payload {
        let payload = record.to_json()?;
        web_sys::console::log_2(
            &JsValue::from_str("registration payload"),
            &JsValue::from_str(&payload),
        );
    }

    let detail = serde_wasm_bindgen::to_value(record)?;
    info!(has_address = record.address.is_some(), "registration form submitted");

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(&detail);
    let event = CustomEvent::new_with_event_init_dict(SUBMIT_EVENT, &init)?;
    form.element().dispatch_event(&event)?;
    Ok(())
}

/// Wire the submit listener. The listener lives as long as the page.
pub fn attach_submit(form: DomForm, config: Rc<FormConfig>) -> Result<(), GlueError> {
    let target = form.element().clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        if let Some(record) = run_submit(&form, &config) {
            if let Err(err) = publish(&form, &config, &record) {
                warn!(%err, "could not publish registration");
            }
        }
    });

    target.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

/// Wire every password-visibility toggle inside the form
pub fn attach_password_toggles(
    document: &Document,
    form: &DomForm,
    config: &FormConfig,
) -> Result<usize, GlueError> {
    let mut wired = 0;

    for button in select_all(form.element(), &config.password_toggle_selector) {
        let Some(target_id) = button.get_attribute(TOGGLE_TARGET_ATTR) else {
            continue;
        };
        let Some(input) = document
            .get_element_by_id(&target_id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            warn!(target_id = %target_id, "password toggle target missing");
            continue;
        };

        let toggle = button.clone();
        let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            let next = toggled_input_type(&input.type_());
            input.set_type(next);
            let _ = toggle.set_attribute("aria-pressed", if next == "text" { "true" } else { "false" });
        });
        button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        handler.forget();
        wired += 1;
    }

    debug!(wired, "password toggles attached");
    Ok(wired)
}

/// `password` shows as `text`; anything else goes back to `password`
pub fn toggled_input_type(current: &str) -> &'static str {
    if current.eq_ignore_ascii_case("password") {
        "text"
    } else {
        "password"
    }
}

/// Show the toast for `toast_duration_ms`. A page without one only logs.
pub fn show_toast(config: &FormConfig, message: &str, is_error: bool) {
    let toast = document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(&config.toast_id));
    let Some(toast) = toast else {
        debug!(text = message, "no toast element");
        return;
    };

    toast.set_text_content(Some(message));
    let classes = toast.class_list();
    let _ = classes.toggle_with_force("is-error", is_error);
    let _ = classes.add_1("show");

    let Some(window) = web_sys::window() else {
        return;
    };
    let hide = Closure::once_into_js(move || {
        let _ = toast.class_list().remove_1("show");
    });
    let delay = i32::try_from(config.toast_duration_ms).unwrap_or(i32::MAX);
    if let Err(err) =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(hide.unchecked_ref(), delay)
    {
        warn!(?err, "could not schedule toast dismissal");
    }
}
