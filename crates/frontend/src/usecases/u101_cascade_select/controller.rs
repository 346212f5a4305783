//! Реакция связки «родитель -> зависимые списки» на изменение и на ответ сервера
//!
//! Nothing here touches `web_sys` directly: controls are reached through
//! [`SelectControl`], so the same code runs against real `<select>` elements
//! and against the fakes in the tests below.

use contracts::shared::select_option::SelectOption;

use super::api::LoadError;
use super::model::{
    plan_change, render_options, CascadeLevel, CascadeStep, RequestGeneration, Ticket,
};
use crate::shared::dom::{RenderedOption, SelectControl};

#[derive(Debug, Clone)]
pub struct CascadeSettings {
    pub api_base: String,
    pub placeholder_label: String,
    pub discard_stale_responses: bool,
}

/// A control together with its request counter
#[derive(Debug, Clone)]
pub struct Tracked<C> {
    pub control: C,
    pub generation: RequestGeneration,
}

impl<C> Tracked<C> {
    pub fn new(control: C) -> Self {
        Self {
            control,
            generation: RequestGeneration::default(),
        }
    }
}

/// Request issued by [`CascadeLink::on_change`], handed back to
/// [`CascadeLink::apply_loaded`] once it settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLoad {
    pub url: String,
    ticket: Ticket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied { items: usize },
    Failed,
    Stale,
}

/// One parent change listener: `target` is reloaded, `descendants` are reset
pub struct CascadeLink<C> {
    pub level: CascadeLevel,
    pub target: Tracked<C>,
    pub descendants: Vec<Tracked<C>>,
}

impl<C: SelectControl> CascadeLink<C> {
    pub fn new(level: CascadeLevel, target: Tracked<C>, descendants: Vec<Tracked<C>>) -> Self {
        Self {
            level,
            target,
            descendants,
        }
    }

    /// Handles a new parent value. `Some` means the caller has to fetch `url`.
    pub fn on_change(&self, value: &str, settings: &CascadeSettings) -> Option<PendingLoad> {
        match plan_change(self.level, value, &settings.api_base) {
            Ok(CascadeStep::Reset) => {
                let placeholder = placeholder_only(settings);
                reset(&self.target, &placeholder);
                for descendant in &self.descendants {
                    reset(descendant, &placeholder);
                }
                None
            }
            Ok(CascadeStep::Load { url }) => Some(PendingLoad {
                url,
                ticket: self.target.generation.issue(),
            }),
            Err(err) => {
                log::error!("Error loading {}: {}", self.level.target_name(), err);
                None
            }
        }
    }

    pub fn apply_loaded(
        &self,
        pending: PendingLoad,
        result: Result<Vec<SelectOption>, LoadError>,
        settings: &CascadeSettings,
    ) -> ApplyOutcome {
        if settings.discard_stale_responses && !self.target.generation.is_current(pending.ticket) {
            log::debug!("Discarding stale response from {}", pending.url);
            return ApplyOutcome::Stale;
        }

        let items = match result {
            Ok(items) => items,
            Err(err) => {
                log::error!("Error loading {}: {}", self.level.target_name(), err);
                return ApplyOutcome::Failed;
            }
        };

        self.target
            .control
            .replace_options(&render_options(&settings.placeholder_label, &items));

        // descendants only after the target is fully rebuilt
        let placeholder = placeholder_only(settings);
        for descendant in &self.descendants {
            reset(descendant, &placeholder);
        }

        ApplyOutcome::Applied { items: items.len() }
    }
}

/// Listeners to attach for one form: each comes with the control it listens on
pub struct CascadeLinks<S, C> {
    pub by_type: Option<(S, CascadeLink<C>)>,
    pub by_category: Option<(C, CascadeLink<C>)>,
}

/// Links whose source and target both exist; a missing subcategory only drops
/// the reset from the type link
pub fn build_links<S, C>(
    type_select: Option<S>,
    category: Option<C>,
    subcategory: Option<C>,
) -> CascadeLinks<S, C>
where
    C: SelectControl + Clone,
{
    let category = category.map(Tracked::new);
    let subcategory = subcategory.map(Tracked::new);

    let by_type = match (type_select, &category) {
        (Some(source), Some(category)) => {
            let descendants = subcategory.iter().cloned().collect();
            Some((
                source,
                CascadeLink::new(CascadeLevel::Type, category.clone(), descendants),
            ))
        }
        _ => None,
    };

    let by_category = match (category, subcategory) {
        (Some(category), Some(subcategory)) => Some((
            category.control,
            CascadeLink::new(CascadeLevel::Category, subcategory, Vec::new()),
        )),
        _ => None,
    };

    CascadeLinks {
        by_type,
        by_category,
    }
}

fn placeholder_only(settings: &CascadeSettings) -> Vec<RenderedOption> {
    render_options(&settings.placeholder_label, &[])
}

fn reset<C: SelectControl>(tracked: &Tracked<C>, placeholder: &[RenderedOption]) {
    tracked.generation.advance();
    tracked.control.replace_options(placeholder);
}
