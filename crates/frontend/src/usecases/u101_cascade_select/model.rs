use std::cell::Cell;
use std::rc::Rc;

use contracts::shared::select_option::SelectOption;
use contracts::usecases::u101_cascade_select::{LoadCategoriesQuery, LoadSubcategoriesQuery};

use super::api::LoadError;
use crate::shared::api_utils::api_url;
use crate::shared::dom::RenderedOption;

/// Которым из родительских списков вызвано изменение
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeLevel {
    /// Тип операции -> категории
    Type,
    /// Категория -> подкатегории
    Category,
}

impl CascadeLevel {
    /// Name of the list this level loads, used in log lines
    pub fn target_name(self) -> &'static str {
        match self {
            CascadeLevel::Type => "categories",
            CascadeLevel::Category => "subcategories",
        }
    }
}

/// Что делать после изменения родительского списка
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeStep {
    /// Placeholder selected: reset the dependent lists, no request
    Reset,
    Load { url: String },
}

/// Placeholder first, then one option per item in server order
pub fn render_options(placeholder: &str, items: &[SelectOption]) -> Vec<RenderedOption> {
    let mut options = Vec::with_capacity(items.len() + 1);
    options.push(RenderedOption::new("", placeholder));
    options.extend(
        items
            .iter()
            .map(|item| RenderedOption::new(item.id.to_string(), item.name.clone())),
    );
    options
}

pub fn plan_change(
    level: CascadeLevel,
    value: &str,
    api_base: &str,
) -> Result<CascadeStep, LoadError> {
    if value.is_empty() {
        return Ok(CascadeStep::Reset);
    }

    let path = match level {
        CascadeLevel::Type => LoadCategoriesQuery::new(value).to_path(),
        CascadeLevel::Category => LoadSubcategoriesQuery::new(value).to_path(),
    }
    .map_err(|e| LoadError::Query(e.to_string()))?;

    Ok(CascadeStep::Load {
        url: api_url(api_base, &path),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Счётчик запросов на один список
///
/// Each load takes a ticket; any later load or reset of the same list makes
/// older tickets stale.
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration(Rc<Cell<u64>>);

impl RequestGeneration {
    pub fn issue(&self) -> Ticket {
        self.advance();
        Ticket(self.0.get())
    }

    pub fn advance(&self) {
        self.0.set(self.0.get().wrapping_add(1));
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0.get() == ticket.0
    }
}
