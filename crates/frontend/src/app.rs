use std::rc::Rc;

use web_sys::{Document, Window};

use crate::config::PageConfig;
use crate::shared::alerts::schedule_alert_dismissal;
use crate::shared::confirm_delete::attach_delete_confirmation;
use crate::usecases::u101_cascade_select::{mount_cascade, CascadeMount, CascadeSettings};

/// What [`mount`] attached to the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountSummary {
    pub cascades: Vec<CascadeMount>,
    pub alerts_scheduled: usize,
    pub delete_buttons: usize,
}

/// Attaches all page behaviors. Call once per page load, after the DOM is parsed.
pub fn mount(window: &Window, document: &Document, config: &PageConfig) -> MountSummary {
    let settings = Rc::new(CascadeSettings {
        api_base: config.api_base.clone(),
        placeholder_label: config.placeholder_label.clone(),
        discard_stale_responses: config.discard_stale_responses,
    });

    let cascades = config
        .cascades
        .iter()
        .map(|ids| mount_cascade(document, ids, settings.clone()))
        .collect();

    let summary = MountSummary {
        cascades,
        alerts_scheduled: schedule_alert_dismissal(
            document,
            &config.alert_selector,
            config.alert_dismiss_delay_ms,
        ),
        delete_buttons: attach_delete_confirmation(
            window,
            document,
            &config.delete_selector,
            &config.delete_confirm_message,
        ),
    };

    log::debug!("Page behaviors mounted: {:?}", summary);
    summary
}
