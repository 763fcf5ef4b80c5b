//! Per-module glue: one in-memory collection, one table query, one optional
//! form draft, and the List ⇄ Form state machine.

use crate::modules::ModuleConfig;
use chancery_ids::{IdAllocator, RecordId};
use chancery_schema::{FormState, Record, TableQuery};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Form,
}

/// Owns the authoritative record array for one module. The save operation
/// is split into [`ModuleController::submit`] (validate + normalize, enter
/// the saving state) and [`ModuleController::complete_save`] (merge), so the
/// caller can put an asynchronous boundary between the two. Today that
/// boundary is a cosmetic delay; it always succeeds.
pub struct ModuleController {
    config: Arc<ModuleConfig>,
    records: Vec<Record>,
    pub query: TableQuery,
    selected: Option<RecordId>,
    mode: ViewMode,
    form: Option<FormState>,
    allocator: IdAllocator,
    saving: bool,
}

impl ModuleController {
    pub fn new(config: Arc<ModuleConfig>) -> Self {
        let records = config.seeds.clone();
        let allocator = IdAllocator::seeded(
            records
                .iter()
                .filter_map(|record| record.id(config.schema.id_field)),
        );
        let (sort_field, direction) = config.default_sort;
        Self {
            query: TableQuery::new(sort_field, direction),
            config,
            records,
            selected: None,
            mode: ViewMode::List,
            form: None,
            allocator,
            saving: false,
        }
    }

    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Filtered, sorted projection under the current query.
    pub fn visible(&self) -> Vec<&Record> {
        self.query.apply(&self.records, &self.config.schema)
    }

    pub fn selected_id(&self) -> Option<RecordId> {
        self.selected
    }

    pub fn select(&mut self, id: Option<RecordId>) {
        self.selected = id;
    }

    pub fn selected_record(&self) -> Option<&Record> {
        let id = self.selected?;
        let id_field = self.config.schema.id_field;
        self.records
            .iter()
            .find(|record| record.id(id_field) == Some(id))
    }

    /// List -> Form with an empty draft.
    pub fn open_create(&mut self) {
        self.form = Some(FormState::new(&self.config.schema, None));
        self.mode = ViewMode::Form;
    }

    /// List -> Form seeded from the selected record. No-op without a
    /// selection.
    pub fn open_edit(&mut self) -> bool {
        let Some(record) = self.selected_record().cloned() else {
            return false;
        };
        self.form = Some(FormState::new(&self.config.schema, Some(&record)));
        self.mode = ViewMode::Form;
        true
    }

    pub fn form(&self) -> Option<&FormState> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut FormState> {
        self.form.as_mut()
    }

    /// Form -> List, draft discarded unconditionally.
    pub fn cancel_form(&mut self) {
        self.form = None;
        self.saving = false;
        self.mode = ViewMode::List;
    }

    /// Validate and normalize the draft. On success the controller enters
    /// the saving state and hands the record to the caller, which owns the
    /// asynchronous boundary and must call [`complete_save`].
    ///
    /// [`complete_save`]: ModuleController::complete_save
    pub fn submit(&mut self, actor: i64) -> Option<Record> {
        let form = self.form.as_mut()?;
        let record = form.submit(&self.config.schema, &mut self.allocator, actor)?;
        self.saving = true;
        Some(record)
    }

    /// Merge a saved record: replace by id, else prepend. Form -> List.
    pub fn complete_save(&mut self, record: Record) {
        let id_field = self.config.schema.id_field;
        let id = record.id(id_field);
        match self
            .records
            .iter()
            .position(|existing| existing.id(id_field) == id && id.is_some())
        {
            Some(index) => self.records[index] = record,
            None => self.records.insert(0, record),
        }
        info!(module = self.config.key, id = ?id, "record saved");
        self.selected = id;
        self.form = None;
        self.saving = false;
        self.mode = ViewMode::List;
    }

    /// Remove the selected record. Clears the selection when it pointed at
    /// the removed record. The confirmation step lives in the UI layer.
    pub fn delete_selected(&mut self) -> Option<Record> {
        let id = self.selected?;
        let id_field = self.config.schema.id_field;
        let index = self
            .records
            .iter()
            .position(|record| record.id(id_field) == Some(id))?;
        let removed = self.records.remove(index);
        info!(module = self.config.key, id = %id, "record deleted");
        self.selected = None;
        Some(removed)
    }
}
