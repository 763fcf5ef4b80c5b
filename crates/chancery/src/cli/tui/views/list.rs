use super::{App, ShellFocus};
use crate::modules::FilterKind;
use chancery_schema::Filter;
use crossterm::event::{KeyCode, KeyEvent};

impl App {
    /// List-mode keys: navigate rows, pick a sort column, open the form,
    /// delete with confirmation, enter filter mode.
    pub(super) fn handle_list_key(&mut self, key: KeyEvent) {
        let visible_count = self.controller().visible().len();
        let column_count = self.controller().config().columns.len();

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.row_cursor = self.row_cursor.saturating_sub(1);
                self.sync_selection();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if visible_count > 0 && self.row_cursor < visible_count - 1 {
                    self.row_cursor += 1;
                }
                self.sync_selection();
            }
            KeyCode::Left => {
                self.col_cursor = self.col_cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                if column_count > 0 && self.col_cursor < column_count - 1 {
                    self.col_cursor += 1;
                }
            }
            // s: sort on the column under the cursor (same column flips)
            KeyCode::Char('s') => {
                if let Some(column) = self
                    .controller()
                    .config()
                    .columns
                    .get(self.col_cursor)
                    .copied()
                {
                    self.controller_mut().query.toggle_sort(column);
                    self.row_cursor = 0;
                    self.sync_selection();
                }
            }
            // n: new record
            KeyCode::Char('n') => {
                self.controller_mut().open_create();
                self.form_cursor = 0;
                self.editing = false;
            }
            // e: edit selection
            KeyCode::Char('e') | KeyCode::Enter => {
                self.sync_selection();
                if self.controller_mut().open_edit() {
                    self.form_cursor = 0;
                    self.editing = false;
                } else {
                    self.set_status("Aucune sélection", true);
                }
            }
            // d: delete selection (confirmation gated)
            KeyCode::Char('d') => {
                self.sync_selection();
                if self.controller().selected_record().is_some() {
                    self.confirm_delete = true;
                } else {
                    self.set_status("Aucune sélection", true);
                }
            }
            // f: filter editor
            KeyCode::Char('f') => {
                if self.controller().config().filters.is_empty() {
                    self.set_status("Aucun filtre pour ce module", true);
                } else {
                    self.filter_mode = true;
                    self.filter_cursor = 0;
                    self.seed_filter_input();
                }
            }
            // x: reset every filter
            KeyCode::Char('x') => {
                self.controller_mut().query.clear_filters();
                self.row_cursor = 0;
                self.sync_selection();
            }
            // v: inventory summary (asset register only)
            KeyCode::Char('v') => {
                if self.controller().config().key == "assets" {
                    self.show_inventory = true;
                }
            }
            KeyCode::Tab => {
                self.rail_cursor = self.active;
                self.focus = ShellFocus::Rail;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char('q') => {
                self.running = false;
            }
            _ => {}
        }
    }

    /// Filter-editor keys. Text and range filters edit a buffer applied on
    /// Enter; reference filters cycle their options in place.
    pub(super) fn handle_filter_key(&mut self, key: KeyEvent) {
        let filter_count = self.controller().config().filters.len();
        match key.code {
            KeyCode::Esc => {
                self.filter_mode = false;
                self.filter_input.clear();
            }
            KeyCode::Up => {
                self.filter_cursor = self.filter_cursor.saturating_sub(1);
                self.seed_filter_input();
            }
            KeyCode::Down => {
                if filter_count > 0 && self.filter_cursor < filter_count - 1 {
                    self.filter_cursor += 1;
                }
                self.seed_filter_input();
            }
            KeyCode::Left | KeyCode::Right => {
                self.cycle_reference_filter(key.code == KeyCode::Right);
            }
            KeyCode::Enter => {
                self.apply_filter_input();
            }
            KeyCode::Backspace => {
                self.filter_input.pop();
            }
            KeyCode::Char(c) => {
                self.filter_input.push(c);
            }
            _ => {}
        }
    }

    /// Seed the edit buffer from whatever the cursor's filter holds.
    fn seed_filter_input(&mut self) {
        let Some(field) = self.current_filter_spec().map(|spec| spec.field) else {
            self.filter_input.clear();
            return;
        };
        let seeded = match self.controller().query.filter_on(field) {
            Some(Filter::Text { query, .. }) => query.clone(),
            Some(Filter::DateRange { from, to, .. }) => format!(
                "{}..{}",
                from.clone().unwrap_or_default(),
                to.clone().unwrap_or_default()
            ),
            Some(Filter::NumberRange { min, max, .. }) => format!(
                "{}..{}",
                min.map(|v| v.to_string()).unwrap_or_default(),
                max.map(|v| v.to_string()).unwrap_or_default()
            ),
            _ => String::new(),
        };
        self.filter_input = seeded;
    }

    fn apply_filter_input(&mut self) {
        let Some(spec) = self.current_filter_spec() else {
            return;
        };
        let field = spec.field.to_string();
        let input = self.filter_input.trim().to_string();
        let filter = match &spec.kind {
            FilterKind::Text => Some(Filter::Text {
                field: field.clone(),
                query: input.clone(),
            }),
            FilterKind::DateRange => {
                let (from, to) = split_range(&input);
                Some(Filter::DateRange {
                    field: field.clone(),
                    from,
                    to,
                })
            }
            FilterKind::NumberRange => {
                let (min, max) = split_range(&input);
                Some(Filter::NumberRange {
                    field: field.clone(),
                    min: min.and_then(|v| v.parse().ok()),
                    max: max.and_then(|v| v.parse().ok()),
                })
            }
            // Reference filters are driven by Left/Right, not the buffer.
            FilterKind::Reference(_) => None,
        };
        if let Some(filter) = filter {
            self.controller_mut().query.set_filter(filter);
            self.row_cursor = 0;
            self.sync_selection();
        }
    }

    /// Step a reference filter through `Tous -> first -> ... -> last -> Tous`.
    fn cycle_reference_filter(&mut self, forward: bool) {
        let Some(spec) = self.current_filter_spec() else {
            return;
        };
        let FilterKind::Reference(list) = &spec.kind else {
            return;
        };
        let list = list.clone();
        let field = spec.field.to_string();
        let current = self.reference_filter_value(spec);

        let next = if forward {
            match current {
                None => list.first_id(),
                Some(id) => match list.position(id) {
                    Some(pos) if pos + 1 < list.entries().len() => {
                        Some(list.entries()[pos + 1].id)
                    }
                    _ => None,
                },
            }
        } else {
            match current {
                None => list.entries().last().map(|entry| entry.id),
                Some(id) => match list.position(id) {
                    Some(0) | None => None,
                    Some(pos) => Some(list.entries()[pos - 1].id),
                },
            }
        };

        match next {
            Some(value) => self
                .controller_mut()
                .query
                .set_filter(Filter::Exact { field, value }),
            None => self.controller_mut().query.clear_filter(&field),
        }
        self.row_cursor = 0;
        self.sync_selection();
    }
}

/// Split a `from..to` range; either side may be blank.
fn split_range(input: &str) -> (Option<String>, Option<String>) {
    let (from, to) = match input.split_once("..") {
        Some((from, to)) => (from.trim(), to.trim()),
        None => (input.trim(), ""),
    };
    let side = |value: &str| {
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    };
    (side(from), side(to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_split_on_double_dots() {
        assert_eq!(
            split_range("2025-01-01..2025-02-01"),
            (
                Some("2025-01-01".to_string()),
                Some("2025-02-01".to_string())
            )
        );
        assert_eq!(split_range("..5"), (None, Some("5".to_string())));
        assert_eq!(split_range("3"), (Some("3".to_string()), None));
        assert_eq!(split_range(""), (None, None));
    }
}
