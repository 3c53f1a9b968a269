// File: src/test_dom.rs
// Purpose: Build throwaway forms in the test page

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement};

use crate::page;

/// Mount `<form id=..>markup</form>` into the document body
pub fn mount_form(id: &str, markup: &str) -> HtmlFormElement {
    let document = page::document().unwrap();
    let form = document
        .create_element("form")
        .unwrap()
        .dyn_into::<HtmlFormElement>()
        .unwrap();
    form.set_id(id);
    form.set_inner_html(markup);
    document.body().unwrap().append_child(&form).unwrap();
    form
}

/// First element in `form` matching `selector`
pub fn find(form: &HtmlFormElement, selector: &str) -> Element {
    form.query_selector(selector).unwrap().unwrap()
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}
