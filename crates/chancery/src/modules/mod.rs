//! Module registry: every domain is configuration over the generic engines.
//!
//! Reference lists, schemas, and seed data mirror the embassy's original
//! registers; labels stay in French. The registry is built once at startup
//! and shared by reference — nothing in here mutates after construction.

use chancery_schema::{ModuleSchema, Record, ReferenceList, SortDirection};
use std::sync::Arc;

mod accounts;
mod appointments;
mod assets;
mod card_requests;
mod citizens;
mod communications;
mod employee_activities;
mod employees;
pub mod inventory;
mod job_applications;
mod job_offers;
mod registrations;
mod requests;
mod scholarships;
mod security_events;
mod security_users;
mod transactions;

/// Widget the filter bar offers for one field.
#[derive(Debug, Clone)]
pub enum FilterKind {
    /// Case-insensitive substring input.
    Text,
    /// One concrete id out of a reference list (or "all").
    Reference(Arc<ReferenceList>),
    /// From/to date inputs.
    DateRange,
    /// Min/max numeric inputs.
    NumberRange,
}

#[derive(Debug, Clone)]
pub struct FilterSpec {
    pub field: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
}

impl FilterSpec {
    pub fn text(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            kind: FilterKind::Text,
        }
    }

    pub fn reference(field: &'static str, label: &'static str, list: Arc<ReferenceList>) -> Self {
        Self {
            field,
            label,
            kind: FilterKind::Reference(list),
        }
    }

    pub fn date_range(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            kind: FilterKind::DateRange,
        }
    }

    pub fn number_range(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            kind: FilterKind::NumberRange,
        }
    }
}

/// Everything one module needs: engine schema plus presentation.
pub struct ModuleConfig {
    /// Stable key used by the CLI (`chancery list citizens`).
    pub key: &'static str,
    /// Sidebar group heading.
    pub group: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub schema: ModuleSchema,
    pub filters: Vec<FilterSpec>,
    /// Schema keys shown as table columns, in order.
    pub columns: Vec<&'static str>,
    pub default_sort: (&'static str, SortDirection),
    pub seeds: Vec<Record>,
}

impl ModuleConfig {
    pub fn column_label(&self, key: &str) -> &'static str {
        self.schema
            .field(key)
            .map(|field| field.label)
            .unwrap_or("?")
    }
}

/// All modules, in sidebar order.
pub fn registry() -> Vec<Arc<ModuleConfig>> {
    vec![
        Arc::new(employees::config()),
        Arc::new(employee_activities::config()),
        Arc::new(card_requests::config()),
        Arc::new(registrations::config()),
        Arc::new(appointments::config()),
        Arc::new(citizens::config()),
        Arc::new(job_offers::config()),
        Arc::new(job_applications::config()),
        Arc::new(communications::config()),
        Arc::new(security_users::config()),
        Arc::new(security_events::config()),
        Arc::new(assets::config()),
        Arc::new(accounts::config()),
        Arc::new(transactions::config()),
        Arc::new(scholarships::config()),
    ]
}

pub fn find(registry: &[Arc<ModuleConfig>], key: &str) -> Option<Arc<ModuleConfig>> {
    registry.iter().find(|config| config.key == key).cloned()
}
