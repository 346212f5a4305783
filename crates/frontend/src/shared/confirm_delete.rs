//! Подтверждение удаления

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, Window};

use crate::shared::dom::query_all;

/// Blocking yes/no question to the user
pub trait ConfirmPrompt {
    fn ask(&self, message: &str) -> bool;
}

impl ConfirmPrompt for Window {
    fn ask(&self, message: &str) -> bool {
        self.confirm_with_message(message).unwrap_or(false)
    }
}

/// An event whose default action can be suppressed
pub trait Cancelable {
    fn cancel(&self);
}

impl Cancelable for Event {
    fn cancel(&self) {
        self.prevent_default();
    }
}

/// Returns whether the default action goes ahead
pub fn guard_delete<P, E>(prompt: &P, event: &E, message: &str) -> bool
where
    P: ConfirmPrompt + ?Sized,
    E: Cancelable + ?Sized,
{
    if prompt.ask(message) {
        return true;
    }
    event.cancel();
    false
}

/// Wires the confirmation to every element matching `selector`; returns how many
pub fn attach_delete_confirmation(
    window: &Window,
    document: &Document,
    selector: &str,
    message: &str,
) -> usize {
    let buttons = query_all(document, selector);

    for button in &buttons {
        let window = window.clone();
        let message = message.to_string();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            if !guard_delete(&window, &event, &message) {
                log::debug!("Delete cancelled by user");
            }
        }) as Box<dyn FnMut(Event)>);

        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    buttons.len()
}
