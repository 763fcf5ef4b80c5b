use super::App;
use chancery_schema::FieldKind;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    /// Form-mode keys. Text-ish fields edit through a buffer committed on
    /// Enter; selects cycle their reference list; booleans toggle.
    /// Ctrl+S submits, Esc cancels.
    pub(super) fn handle_form_key(&mut self, key: KeyEvent) {
        if self.controller().is_saving() {
            // The simulated backend always completes; just wait for it.
            return;
        }

        if self.editing {
            match key.code {
                KeyCode::Enter => {
                    let input = self.input.clone();
                    self.set_form_value(&input);
                    self.editing = false;
                    self.input.clear();
                }
                KeyCode::Esc => {
                    self.editing = false;
                    self.input.clear();
                }
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.input.push(c);
                }
                _ => {}
            }
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            self.submit_form();
            return;
        }

        let rows = self.form_rows();
        match key.code {
            KeyCode::Esc => {
                self.controller_mut().cancel_form();
                self.editing = false;
                self.input.clear();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.form_cursor = self.form_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                if !rows.is_empty() && self.form_cursor < rows.len() - 1 {
                    self.form_cursor += 1;
                }
            }
            KeyCode::Left => self.step_current_field(false),
            KeyCode::Right => self.step_current_field(true),
            KeyCode::Char(' ') => {
                if let Some(row) = rows.get(self.form_cursor) {
                    if row.kind == FieldKind::Boolean {
                        self.toggle_current_boolean();
                    }
                }
            }
            KeyCode::Enter => {
                if let Some(row) = rows.get(self.form_cursor) {
                    match row.kind {
                        FieldKind::Boolean => self.toggle_current_boolean(),
                        FieldKind::Select => self.step_current_field(true),
                        _ => {
                            self.input = self.current_form_value();
                            self.editing = true;
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        let actor = self.app_config.actor_id;
        match self.controller_mut().submit(actor) {
            Some(record) => {
                self.set_status("Enregistrement...", false);
                self.spawn_save(record);
            }
            None => {
                let errors = self
                    .controller()
                    .form()
                    .map(|form| form.has_errors())
                    .unwrap_or(false);
                if errors {
                    self.set_status("Corrigez les erreurs avant d'enregistrer", true);
                }
            }
        }
    }

    /// Value of the field under the cursor, as typed.
    pub(super) fn current_form_value(&self) -> String {
        let rows = self.form_rows();
        let Some(row) = rows.get(self.form_cursor) else {
            return String::new();
        };
        let Some(form) = self.controller().form() else {
            return String::new();
        };
        if row.dynamic {
            form.extra_value(&row.key).to_string()
        } else {
            form.value(&row.key).to_string()
        }
    }

    fn set_form_value(&mut self, input: &str) {
        let rows = self.form_rows();
        let Some(row) = rows.get(self.form_cursor) else {
            return;
        };
        let key = row.key.clone();
        let dynamic = row.dynamic;
        let input = input.to_string();
        if let Some(form) = self.controller_mut().form_mut() {
            if dynamic {
                form.set_extra(&key, input);
            } else {
                form.set_value(&key, input);
            }
        }
    }

    /// Left/Right on a select: walk its reference list. On any other field
    /// kind this is a no-op.
    fn step_current_field(&mut self, forward: bool) {
        let rows = self.form_rows();
        let Some(row) = rows.get(self.form_cursor) else {
            return;
        };
        if row.kind == FieldKind::Boolean {
            self.toggle_current_boolean();
            return;
        }
        let Some(list) = row.reference.clone() else {
            return;
        };
        let key = row.key.clone();
        let current = self.current_form_value().trim().parse::<i64>().ok();
        let next = if forward {
            list.next_id(current)
        } else {
            list.prev_id(current)
        };
        if let (Some(next), Some(form)) = (next, self.controller_mut().form_mut()) {
            form.set_value(&key, next.to_string());
        }
    }

    fn toggle_current_boolean(&mut self) {
        let current = self.current_form_value();
        let toggled = if current.trim() == "true" {
            "false"
        } else {
            "true"
        };
        self.set_form_value(toggled);
    }
}

#[cfg(test)]
mod tests {
    use super::super::App;
    use crate::config::AppConfig;
    use crate::controller::ViewMode;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn open_citizen_form() -> App {
        let mut app = App::new(AppConfig::default());
        let citizens = app
            .nav
            .iter()
            .position(|entry| entry.key == "citizens")
            .unwrap();
        app.activate(citizens);
        app.handle_key(key(KeyCode::Char('n'))).await;
        app
    }

    #[tokio::test]
    async fn typing_commits_through_the_buffer() {
        let mut app = open_citizen_form().await;
        // Field 0 is org_id; just edit it in place.
        app.handle_key(key(KeyCode::Enter)).await;
        assert!(app.editing);
        app.handle_key(key(KeyCode::Char('X'))).await;
        app.handle_key(key(KeyCode::Enter)).await;
        assert!(!app.editing);
        let value = app.controller().form().unwrap().value("org_id").to_string();
        assert!(value.ends_with('X'));
    }

    #[tokio::test]
    async fn escape_in_edit_mode_keeps_the_old_value() {
        let mut app = open_citizen_form().await;
        let before = app.current_form_value();
        app.handle_key(key(KeyCode::Enter)).await;
        app.handle_key(key(KeyCode::Char('Z'))).await;
        app.handle_key(key(KeyCode::Esc)).await;
        assert_eq!(app.current_form_value(), before);
        assert_eq!(app.controller().mode(), ViewMode::Form);
    }

    #[tokio::test]
    async fn escape_outside_edit_mode_cancels_the_form() {
        let mut app = open_citizen_form().await;
        app.handle_key(key(KeyCode::Esc)).await;
        assert_eq!(app.controller().mode(), ViewMode::List);
        assert!(app.controller().form().is_none());
    }

    #[tokio::test]
    async fn selecting_a_type_reshapes_the_dynamic_rows() {
        let mut app = open_citizen_form().await;
        let fixed = app.controller().config().schema.fields.len();
        assert_eq!(app.form_rows().len(), fixed);

        // citizen_type_id starts unset; stepping right picks Étudiant.
        let type_row = app
            .form_rows()
            .iter()
            .position(|row| row.key == "citizen_type_id")
            .unwrap();
        app.form_cursor = type_row;
        app.handle_key(key(KeyCode::Right)).await;

        let rows = app.form_rows();
        assert!(rows.len() > fixed);
        assert!(rows.iter().any(|row| row.key == "institution" && row.dynamic));
    }

    #[tokio::test]
    async fn submit_with_violations_reports_and_stays() {
        let mut app = open_citizen_form().await;
        app.handle_key(KeyEvent::new(
            KeyCode::Char('s'),
            KeyModifiers::CONTROL,
        ))
        .await;
        assert_eq!(app.controller().mode(), ViewMode::Form);
        assert!(app.controller().form().unwrap().has_errors());
        let (message, is_error) = app.status.clone().unwrap();
        assert!(is_error);
        assert!(message.contains("erreurs"));
    }
}
