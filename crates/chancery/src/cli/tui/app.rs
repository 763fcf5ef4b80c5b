//! Application state for the TUI.

use crate::config::AppConfig;
use crate::controller::{ModuleController, ViewMode};
use crate::modules::{self, FilterKind, FilterSpec};
use chancery_schema::{FieldKind, Record, ReferenceList};
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use super::nav::{self, NavEntry};

#[path = "views/form.rs"]
mod form_view;
#[path = "views/list.rs"]
mod list_view;

/// Simulated persistence latency, matching the original mock backend.
const SAVE_DELAY: Duration = Duration::from_millis(400);

/// Which shell pane owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellFocus {
    Rail,
    #[default]
    Main,
}

/// A completed (simulated) save coming back from the async boundary.
pub struct SaveDone {
    pub module: usize,
    pub record: Record,
}

/// One renderable form row: a fixed field or an active dynamic field.
pub struct FormRow {
    pub key: String,
    pub label: &'static str,
    pub kind: FieldKind,
    pub reference: Option<Arc<ReferenceList>>,
    pub dynamic: bool,
}

pub struct App {
    pub running: bool,
    pub app_config: AppConfig,
    pub controllers: Vec<ModuleController>,
    pub nav: Vec<NavEntry>,
    pub active: usize,
    pub focus: ShellFocus,
    pub rail_cursor: usize,
    pub row_cursor: usize,
    pub col_cursor: usize,
    pub show_help: bool,
    pub show_inventory: bool,
    pub confirm_delete: bool,
    pub filter_mode: bool,
    pub filter_cursor: usize,
    pub filter_input: String,
    pub form_cursor: usize,
    pub editing: bool,
    pub input: String,
    pub status: Option<(String, bool)>,
    save_tx: mpsc::Sender<SaveDone>,
    save_rx: mpsc::Receiver<SaveDone>,
}

impl App {
    pub fn new(app_config: AppConfig) -> Self {
        let registry = modules::registry();
        let nav = nav::build(&registry);
        let controllers = registry.into_iter().map(ModuleController::new).collect();
        let (save_tx, save_rx) = mpsc::channel();
        Self {
            running: true,
            app_config,
            controllers,
            nav,
            active: 0,
            focus: ShellFocus::Main,
            rail_cursor: 0,
            row_cursor: 0,
            col_cursor: 0,
            show_help: false,
            show_inventory: false,
            confirm_delete: false,
            filter_mode: false,
            filter_cursor: 0,
            filter_input: String::new(),
            form_cursor: 0,
            editing: false,
            input: String::new(),
            status: None,
            save_tx,
            save_rx,
        }
    }

    pub fn controller(&self) -> &ModuleController {
        &self.controllers[self.active]
    }

    pub fn controller_mut(&mut self) -> &mut ModuleController {
        &mut self.controllers[self.active]
    }

    pub fn set_status(&mut self, message: impl Into<String>, is_error: bool) {
        self.status = Some((message.into(), is_error));
    }

    /// Whether keystrokes are currently text input.
    pub fn is_text_input(&self) -> bool {
        self.editing || self.filter_mode
    }

    /// Switch the active module, resetting per-view cursors.
    pub fn activate(&mut self, index: usize) {
        if index < self.controllers.len() {
            self.active = index;
            self.row_cursor = 0;
            self.col_cursor = 0;
            self.show_inventory = false;
            self.confirm_delete = false;
            self.filter_mode = false;
            self.focus = ShellFocus::Main;
        }
    }

    /// Rows of the active form: fixed fields then the dynamic fields of the
    /// current discriminator value.
    pub fn form_rows(&self) -> Vec<FormRow> {
        let controller = self.controller();
        let Some(form) = controller.form() else {
            return Vec::new();
        };
        let schema = &controller.config().schema;
        let mut rows: Vec<FormRow> = schema
            .fields
            .iter()
            .map(|field| FormRow {
                key: field.key.to_string(),
                label: field.label,
                kind: field.kind,
                reference: field.reference.clone(),
                dynamic: false,
            })
            .collect();
        rows.extend(form.active_dynamic_fields(schema).iter().map(|field| FormRow {
            key: field.key.to_string(),
            label: field.label,
            kind: field.kind,
            reference: None,
            dynamic: true,
        }));
        rows
    }

    /// Keep the row cursor inside the filtered view and mirror it into the
    /// controller selection.
    pub(super) fn sync_selection(&mut self) {
        let id_field = self.controller().config().schema.id_field;
        let visible_ids: Vec<_> = self
            .controller()
            .visible()
            .iter()
            .map(|record| record.id(id_field))
            .collect();
        if visible_ids.is_empty() {
            self.row_cursor = 0;
            self.controller_mut().select(None);
            return;
        }
        if self.row_cursor >= visible_ids.len() {
            self.row_cursor = visible_ids.len() - 1;
        }
        let id = visible_ids[self.row_cursor];
        self.controller_mut().select(id);
    }

    /// Hand a validated record to the simulated persistence boundary. The
    /// result comes back through the tick loop.
    pub(super) fn spawn_save(&mut self, record: Record) {
        let module = self.active;
        let tx = self.save_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(SAVE_DELAY).await;
            // Receiver only disappears on shutdown.
            if tx.send(SaveDone { module, record }).is_err() {
                warn!("save completion dropped: app already closed");
            }
        });
    }

    /// Periodic tick: fold completed saves back into their collections.
    pub async fn tick(&mut self) {
        while let Ok(done) = self.save_rx.try_recv() {
            self.controllers[done.module].complete_save(done.record);
            if done.module == self.active {
                self.row_cursor = 0;
                self.set_status("Enregistré", false);
            }
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        self.status = None;

        if self.show_help {
            self.show_help = false;
            return;
        }
        if self.show_inventory {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('v') | KeyCode::Char('q')) {
                self.show_inventory = false;
            }
            return;
        }

        match self.controller().mode() {
            ViewMode::Form => self.handle_form_key(key),
            ViewMode::List => {
                if self.confirm_delete {
                    self.handle_confirm_key(key);
                } else if self.filter_mode {
                    self.handle_filter_key(key);
                } else if self.focus == ShellFocus::Rail {
                    self.handle_rail_key(key);
                } else {
                    self.handle_list_key(key);
                }
            }
        }
    }

    fn handle_rail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.rail_cursor = self.rail_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.rail_cursor + 1 < self.nav.len() {
                    self.rail_cursor += 1;
                }
            }
            KeyCode::Enter => {
                let index = self.nav[self.rail_cursor].module_index;
                self.activate(index);
            }
            KeyCode::Tab | KeyCode::Esc => {
                self.focus = ShellFocus::Main;
            }
            KeyCode::Char('q') => {
                self.running = false;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                if let Some(removed) = self.controller_mut().delete_selected() {
                    let id_field = self.controller().config().schema.id_field;
                    self.set_status(
                        format!("Supprimé ({})", removed.render(id_field)),
                        false,
                    );
                }
                self.confirm_delete = false;
                // Selection stays cleared until the next cursor move.
                self.row_cursor = 0;
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.confirm_delete = false;
            }
            _ => {}
        }
    }

    /// The filter spec under the cursor, if the module defines any.
    pub(super) fn current_filter_spec(&self) -> Option<&FilterSpec> {
        self.controller().config().filters.get(self.filter_cursor)
    }

    /// Current id picked on a reference filter, if one is applied.
    pub(super) fn reference_filter_value(&self, spec: &FilterSpec) -> Option<i64> {
        match self.controller().query.filter_on(spec.field) {
            Some(chancery_schema::Filter::Exact { value, .. }) => Some(*value),
            _ => None,
        }
    }

    pub(super) fn is_reference_filter(&self, spec: &FilterSpec) -> bool {
        matches!(spec.kind, FilterKind::Reference(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ViewMode;
    use chancery_schema::Filter;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app() -> App {
        App::new(AppConfig::default())
    }

    #[tokio::test]
    async fn starts_on_the_first_module_in_list_mode() {
        let app = app();
        assert!(app.running);
        assert_eq!(app.active, 0);
        assert_eq!(app.controller().mode(), ViewMode::List);
        assert_eq!(app.focus, ShellFocus::Main);
    }

    #[tokio::test]
    async fn rail_enter_activates_the_selected_module() {
        let mut app = app();
        app.focus = ShellFocus::Rail;
        app.handle_key(key(KeyCode::Down)).await;
        app.handle_key(key(KeyCode::Enter)).await;
        assert_eq!(app.active, 1);
        assert_eq!(app.focus, ShellFocus::Main);
    }

    #[tokio::test]
    async fn cursor_moves_select_visible_rows() {
        let mut app = app();
        app.handle_key(key(KeyCode::Down)).await;
        let id_field = app.controller().config().schema.id_field;
        let expected = app.controller().visible()[1].id(id_field);
        assert_eq!(app.controller().selected_id(), expected);
    }

    #[tokio::test]
    async fn delete_flow_requires_confirmation() {
        let mut app = app();
        let before = app.controller().records().len();
        app.handle_key(key(KeyCode::Down)).await;
        app.handle_key(key(KeyCode::Char('d'))).await;
        assert!(app.confirm_delete);
        app.handle_key(key(KeyCode::Char('n'))).await;
        assert_eq!(app.controller().records().len(), before);

        app.handle_key(key(KeyCode::Char('d'))).await;
        app.handle_key(key(KeyCode::Char('y'))).await;
        assert_eq!(app.controller().records().len(), before - 1);
        assert!(app.controller().selected_id().is_none());
    }

    #[tokio::test]
    async fn create_edit_save_roundtrip_through_the_async_boundary() {
        let mut app = app();
        let before = app.controller().records().len();

        app.handle_key(key(KeyCode::Char('n'))).await;
        assert_eq!(app.controller().mode(), ViewMode::Form);

        if let Some(form) = app.controller_mut().form_mut() {
            form.set_value("gov_employe_matricule", "TST001");
            form.set_value("gov_employe_last_name", "TEST");
            form.set_value("gov_employe_first_name", "Essai");
        }
        app.handle_key(ctrl('s')).await;
        assert!(app.controller().is_saving());

        // The simulated delay resolves unconditionally.
        tokio::time::sleep(Duration::from_millis(600)).await;
        app.tick().await;
        assert_eq!(app.controller().mode(), ViewMode::List);
        assert_eq!(app.controller().records().len(), before + 1);
    }

    #[tokio::test]
    async fn filter_mode_applies_text_filters() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('f'))).await;
        assert!(app.filter_mode);
        for c in "ada".chars() {
            app.handle_key(key(KeyCode::Char(c))).await;
        }
        app.handle_key(key(KeyCode::Enter)).await;
        app.handle_key(key(KeyCode::Esc)).await;
        assert!(!app.filter_mode);
        assert!(matches!(
            app.controller().query.filters.first(),
            Some(Filter::Text { .. })
        ));
        assert_eq!(app.controller().visible().len(), 1);
    }

    #[tokio::test]
    async fn sort_toggle_flips_direction_on_the_same_column() {
        let mut app = app();
        let column = app.controller().config().columns[0];
        app.handle_key(key(KeyCode::Char('s'))).await;
        assert_eq!(app.controller().query.sort_field, column);
        let first = app.controller().query.direction;
        app.handle_key(key(KeyCode::Char('s'))).await;
        assert_eq!(app.controller().query.direction, first.toggled());
    }

    #[tokio::test]
    async fn help_overlay_swallows_the_next_key() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('?'))).await;
        assert!(app.show_help);
        app.handle_key(key(KeyCode::Char('q'))).await;
        assert!(app.show_help == false && app.running);
    }
}
