//! Автоматическое скрытие сообщений
//!
//! The set of alerts is captured when the page mounts; banners inserted later
//! stay until the user closes them.

use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Reflect};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::shared::dom::query_all;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DismissError {
    #[error("element is no longer in the document")]
    Detached,

    #[error("dismissal failed: {0}")]
    Js(String),
}

pub trait Dismissible {
    fn dismiss(&self) -> Result<(), DismissError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DismissReport {
    pub dismissed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Dismisses every element independently; one failure does not stop the rest
pub fn dismiss_all<D: Dismissible>(alerts: &[D]) -> DismissReport {
    let mut report = DismissReport::default();
    for alert in alerts {
        match alert.dismiss() {
            Ok(()) => report.dismissed += 1,
            Err(DismissError::Detached) => report.skipped += 1,
            Err(err) => {
                log::warn!("Failed to dismiss alert: {}", err);
                report.failed += 1;
            }
        }
    }
    report
}

/// An alert banner in the live document
pub struct AlertElement(pub Element);

impl Dismissible for AlertElement {
    fn dismiss(&self) -> Result<(), DismissError> {
        if !self.0.is_connected() {
            return Err(DismissError::Detached);
        }

        match bootstrap_close(&self.0) {
            Ok(true) => Ok(()),
            Ok(false) => {
                // no Bootstrap on the page
                let _ = self.0.class_list().remove_1("show");
                self.0.remove();
                Ok(())
            }
            Err(err) => Err(DismissError::Js(format!("{:?}", err))),
        }
    }
}

/// `bootstrap.Alert.getOrCreateInstance(el).close()`; `Ok(false)` when Bootstrap is not loaded
fn bootstrap_close(element: &Element) -> Result<bool, JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(false);
    };

    let bootstrap = Reflect::get(&window, &JsValue::from_str("bootstrap"))?;
    if bootstrap.is_undefined() || bootstrap.is_null() {
        return Ok(false);
    }
    let alert_class = Reflect::get(&bootstrap, &JsValue::from_str("Alert"))?;
    if alert_class.is_undefined() || alert_class.is_null() {
        return Ok(false);
    }

    let get_instance: Function =
        Reflect::get(&alert_class, &JsValue::from_str("getOrCreateInstance"))?.dyn_into()?;
    let instance = get_instance.call1(&alert_class, element)?;
    let close: Function = Reflect::get(&instance, &JsValue::from_str("close"))?.dyn_into()?;
    close.call0(&instance)?;
    Ok(true)
}

/// Alerts captured now, to be dismissed later
pub struct PendingDismissal<D> {
    alerts: Vec<D>,
}

impl<D: Dismissible> PendingDismissal<D> {
    /// Calls `source` once, now; later changes to the page are not seen by [`run`](Self::run)
    pub fn capture<F, I>(source: F) -> Self
    where
        F: FnOnce() -> I,
        I: IntoIterator<Item = D>,
    {
        Self {
            alerts: source().into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn run(self) -> DismissReport {
        dismiss_all(&self.alerts)
    }
}

/// Schedules one dismissal pass `delay_ms` from now; returns the number of alerts captured
pub fn schedule_alert_dismissal(document: &Document, selector: &str, delay_ms: u32) -> usize {
    let pending = PendingDismissal::capture(|| {
        query_all(document, selector)
            .into_iter()
            .map(AlertElement)
    });
    let count = pending.len();

    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        let report = pending.run();
        log::debug!(
            "Alerts dismissed: {}, already gone: {}, failed: {}",
            report.dismissed,
            report.skipped,
            report.failed
        );
    });

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeAlert {
        visible: Rc<Cell<bool>>,
        broken: bool,
    }

    impl FakeAlert {
        fn shown() -> Self {
            let alert = Self::default();
            alert.visible.set(true);
            alert
        }

        fn broken() -> Self {
            Self {
                broken: true,
                ..Self::shown()
            }
        }
    }

    impl Dismissible for FakeAlert {
        fn dismiss(&self) -> Result<(), DismissError> {
            if !self.visible.get() {
                return Err(DismissError::Detached);
            }
            if self.broken {
                return Err(DismissError::Js("TypeError".to_string()));
            }
            self.visible.set(false);
            Ok(())
        }
    }

    #[test]
    fn test_captured_alerts_are_dismissed() {
        let page = RefCell::new(vec![FakeAlert::shown(), FakeAlert::shown()]);
        let pending = PendingDismissal::capture(|| page.borrow().clone());

        // rendered a second after load, before the timer fires
        let late = FakeAlert::shown();
        page.borrow_mut().push(late.clone());

        let report = pending.run();

        assert_eq!(report.dismissed, 2);
        assert!(!page.borrow()[0].visible.get());
        assert!(!page.borrow()[1].visible.get());
        assert!(late.visible.get());
    }

    #[test]
    fn test_source_is_read_once() {
        let reads = Cell::new(0);
        let pending = PendingDismissal::capture(|| {
            reads.set(reads.get() + 1);
            vec![FakeAlert::shown()]
        });
        assert_eq!(reads.get(), 1);

        pending.run();
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn test_already_closed_alert_is_skipped() {
        let closed = FakeAlert::default();
        let open = FakeAlert::shown();

        let report = dismiss_all(&[closed, open.clone()]);

        assert_eq!(
            report,
            DismissReport {
                dismissed: 1,
                skipped: 1,
                failed: 0
            }
        );
        assert!(!open.visible.get());
    }

    #[test]
    fn test_failure_does_not_block_others() {
        let broken = FakeAlert::broken();
        let open = FakeAlert::shown();

        let report = dismiss_all(&[broken, open.clone()]);

        assert_eq!(report.failed, 1);
        assert_eq!(report.dismissed, 1);
        assert!(!open.visible.get());
    }

    #[test]
    fn test_nothing_to_dismiss() {
        let pending: PendingDismissal<FakeAlert> = PendingDismissal::capture(Vec::new);
        assert!(pending.is_empty());
        assert_eq!(pending.run(), DismissReport::default());
    }
}
