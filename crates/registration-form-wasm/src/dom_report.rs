// File: src/dom_report.rs
// Purpose: InvalidationReporter that decorates the page

use registration_form::{FormConfig, InvalidationReporter};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom_form::DomForm;

/// Marks controls with the invalid class and fills the feedback region next
/// to them.
pub struct DomReporter<'a> {
    form: &'a DomForm,
    config: &'a FormConfig,
    first_invalid: Option<Element>,
}

impl<'a> DomReporter<'a> {
    pub fn new(form: &'a DomForm, config: &'a FormConfig) -> Self {
        Self {
            form,
            config,
            first_invalid: None,
        }
    }

    /// Focus the first control marked since the last `clear_all`
    pub fn focus_first_invalid(&self) {
        let Some(control) = self.first_invalid.as_ref() else {
            return;
        };
        if let Some(control) = control.dyn_ref::<HtmlElement>() {
            if let Err(err) = control.focus() {
                warn!(?err, "could not focus invalid control");
            }
        }
    }

    /// Feedback region belonging to `control`: the first matching sibling
    /// after it, up to the next named control. `None` means flag only.
    fn feedback_region(&self, control: &Element) -> Option<Element> {
        let selector = self.config.feedback_selector.as_str();
        let mut sibling = control.next_element_sibling();

        while let Some(element) = sibling {
            if element.matches(selector).unwrap_or(false) {
                return Some(element);
            }
            if element.has_attribute("name") {
                return None;
            }
            sibling = element.next_element_sibling();
        }
        None
    }
}

impl InvalidationReporter for DomReporter<'_> {
    fn mark_invalid(&mut self, field: &str, message: Option<&str>) {
        let Some(control) = self.form.control(field) else {
            return;
        };

        if let Err(err) = control.class_list().add_1(&self.config.invalid_class) {
            warn!(field, ?err, "could not flag control");
        }

        if let Some(message) = message {
            if let Some(region) = self.feedback_region(&control) {
                region.set_text_content(Some(message));
                let _ = region
                    .class_list()
                    .add_1(&self.config.feedback_visible_class);
            }
        }

        if self.first_invalid.is_none() {
            self.first_invalid = Some(control);
        }
    }

    fn clear_all(&mut self) {
        self.first_invalid = None;

        let root = self.form.element();
        let invalid = format!(".{}", self.config.invalid_class);
        for element in select_all(root, &invalid) {
            let _ = element.class_list().remove_1(&self.config.invalid_class);
        }
        for region in select_all(root, &self.config.feedback_selector) {
            let _ = region
                .class_list()
                .remove_1(&self.config.feedback_visible_class);
        }
    }
}

pub(crate) fn select_all(root: &Element, selector: &str) -> Vec<Element> {
    let list = match root.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            warn!(selector, ?err, "bad selector");
            return Vec::new();
        }
    };

    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
