// File: src/dom_form.rs
// Purpose: FieldSource over a live <form> element

use registration_form::FieldSource;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, FormData, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, RadioNodeList,
};

/// Reads controls of an `HtmlFormElement` by name
#[derive(Debug, Clone)]
pub struct DomForm {
    form: HtmlFormElement,
}

impl DomForm {
    pub fn new(form: HtmlFormElement) -> Self {
        Self { form }
    }

    pub fn element(&self) -> &HtmlFormElement {
        &self.form
    }

    /// The named control; for radio/checkbox groups, the first member
    pub fn control(&self, name: &str) -> Option<Element> {
        let item = self.form.elements().named_item(name)?;
        match item.dyn_into::<RadioNodeList>() {
            Ok(group) => group.item(0)?.dyn_into::<Element>().ok(),
            Err(item) => item.dyn_into::<Element>().ok(),
        }
    }
}

impl FieldSource for DomForm {
    fn control_value(&self, name: &str) -> Option<String> {
        let item = self.form.elements().named_item(name)?;
        if let Some(group) = item.dyn_ref::<RadioNodeList>() {
            return Some(group.value());
        }

        if let Some(input) = item.dyn_ref::<HtmlInputElement>() {
            Some(input.value())
        } else if let Some(select) = item.dyn_ref::<HtmlSelectElement>() {
            Some(select.value())
        } else if let Some(area) = item.dyn_ref::<HtmlTextAreaElement>() {
            Some(area.value())
        } else {
            None
        }
    }

    fn is_checked(&self, name: &str) -> bool {
        self.control(name)
            .and_then(|control| control.dyn_into::<HtmlInputElement>().ok())
            .map_or(false, |input| input.checked())
    }

    fn form_data(&self, name: &str) -> Option<String> {
        match FormData::new_with_form(&self.form) {
            Ok(data) => data.get(name).as_string(),
            Err(err) => {
                tracing::warn!(name, ?err, "form data unavailable");
                None
            }
        }
    }
}
