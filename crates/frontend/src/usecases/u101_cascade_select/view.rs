use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlSelectElement};

use super::api::fetch_options;
use super::controller::{build_links, CascadeLink, CascadeSettings};
use crate::config::CascadeConfig;
use crate::shared::dom::select_by_id;

/// Which listeners one cascade group got
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeMount {
    pub type_listener: bool,
    pub category_listener: bool,
}

/// Привязывает обработчики `change` к спискам типа и категории
///
/// A listener is attached only when both its source and its target exist.
pub fn mount_cascade(
    document: &Document,
    ids: &CascadeConfig,
    settings: Rc<CascadeSettings>,
) -> CascadeMount {
    let links = build_links(
        select_by_id(document, &ids.type_id),
        select_by_id(document, &ids.category_id),
        select_by_id(document, &ids.subcategory_id),
    );

    let mut mount = CascadeMount::default();

    if let Some((source, link)) = links.by_type {
        listen_change(&source, Rc::new(link), settings.clone());
        mount.type_listener = true;
    } else {
        log::debug!(
            "Cascade {} -> {}: control missing, listener not attached",
            ids.type_id,
            ids.category_id
        );
    }

    if let Some((source, link)) = links.by_category {
        listen_change(&source, Rc::new(link), settings);
        mount.category_listener = true;
    } else {
        log::debug!(
            "Cascade {} -> {}: control missing, listener not attached",
            ids.category_id,
            ids.subcategory_id
        );
    }

    mount
}

fn listen_change(
    source: &HtmlSelectElement,
    link: Rc<CascadeLink<HtmlSelectElement>>,
    settings: Rc<CascadeSettings>,
) {
    let select = source.clone();
    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        let Some(pending) = link.on_change(&select.value(), &settings) else {
            return;
        };

        let link = link.clone();
        let settings = settings.clone();
        spawn_local(async move {
            let result = fetch_options(&pending.url).await;
            link.apply_loaded(pending, result, &settings);
        });
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = source.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}
