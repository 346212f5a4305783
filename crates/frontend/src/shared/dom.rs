//! Thin helpers over `web_sys` for pages rendered by the server.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlOptionElement, HtmlSelectElement};

/// One `<option>` of a select control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOption {
    pub value: String,
    pub label: String,
}

impl RenderedOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A dropdown whose option list can be rebuilt
pub trait SelectControl {
    /// Drops every existing option, then appends `options` in order
    fn replace_options(&self, options: &[RenderedOption]);
}

impl SelectControl for HtmlSelectElement {
    fn replace_options(&self, options: &[RenderedOption]) {
        self.set_inner_html("");
        for option in options {
            let Ok(el) = HtmlOptionElement::new_with_text_and_value(&option.label, &option.value)
            else {
                continue;
            };
            let _ = self.append_child(&el);
        }
    }
}

/// Finds a `<select>` by id; anything else with that id counts as absent
pub fn select_by_id(document: &Document, id: &str) -> Option<HtmlSelectElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
}

/// Snapshot of the elements matching `selector`
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        log::warn!("Invalid selector: {}", selector);
        return Vec::new();
    };

    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            elements.push(el);
        }
    }
    elements
}

/// Runs `f` once the document has been parsed
pub fn on_dom_ready<F>(document: &Document, f: F)
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        f();
        return;
    }

    let callback = Closure::<dyn FnMut()>::once_into_js(f);
    let _ = document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref());
}
