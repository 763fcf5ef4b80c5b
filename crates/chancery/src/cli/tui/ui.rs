//! UI rendering for the TUI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};

use super::app::{App, ShellFocus};
use super::components::{action_bar, modal};
use super::nav;
use crate::cli::output;
use crate::controller::ViewMode;
use crate::modules::{inventory, FilterKind};
use chancery_schema::{dynamic_columns, FieldKind, Filter};

const RAIL_WIDTH: u16 = 26;

/// Draw the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let shell = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(RAIL_WIDTH), Constraint::Min(0)])
        .split(shell[0]);

    draw_rail(frame, app, panes[0]);
    match app.controller().mode() {
        ViewMode::List => draw_list_screen(frame, app, panes[1]),
        ViewMode::Form => draw_form_screen(frame, app, panes[1]),
    }

    action_bar::render_action_bar(frame, shell[1], &app.effective_actions());

    if app.confirm_delete {
        draw_delete_confirm(frame, app, area);
    }
    if app.show_inventory {
        draw_inventory(frame, app, area);
    }
    if app.show_help {
        let lines = action_bar::format_help_lines(&app.effective_actions());
        modal::render_panel(frame, area, "Aide", lines);
    }
}

/// Navigation rail, grouped under the sidebar headings.
fn draw_rail(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == ShellFocus::Rail;
    let mut lines: Vec<Line> = Vec::new();
    for (index, entry) in app.nav.iter().enumerate() {
        if nav::starts_group(&app.nav, index) {
            lines.push(Line::from(Span::styled(
                format!(" {}", entry.group),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        let active = entry.module_index == app.active;
        let under_cursor = focused && index == app.rail_cursor;
        let style = if under_cursor {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else if active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let marker = if active { "▸" } else { " " };
        lines.push(Line::from(Span::styled(
            format!("  {marker} {}", entry.title),
            style,
        )));
    }

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title(" Chancery ")
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn filter_summary(app: &App) -> String {
    let controller = app.controller();
    let config = controller.config();
    let mut parts: Vec<String> = Vec::new();
    for spec in &config.filters {
        let Some(filter) = controller.query.filter_on(spec.field) else {
            continue;
        };
        let rendered = match filter {
            Filter::Text { query, .. } => format!("{}≈{}", spec.label, query),
            Filter::Exact { value, .. } => match &spec.kind {
                FilterKind::Reference(list) => {
                    format!("{}={}", spec.label, list.label_or_dash(*value))
                }
                _ => format!("{}={}", spec.label, value),
            },
            Filter::DateRange { from, to, .. } => format!(
                "{}: {}..{}",
                spec.label,
                from.clone().unwrap_or_default(),
                to.clone().unwrap_or_default()
            ),
            Filter::NumberRange { min, max, .. } => format!(
                "{}: {}..{}",
                spec.label,
                min.map(|v| v.to_string()).unwrap_or_default(),
                max.map(|v| v.to_string()).unwrap_or_default()
            ),
        };
        parts.push(rendered);
    }
    if parts.is_empty() {
        "Aucun filtre actif".to_string()
    } else {
        parts.join("  ·  ")
    }
}

fn draw_list_screen(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_list_header(frame, app, chunks[0]);
    draw_record_table(frame, app, chunks[1]);
    draw_status_line(frame, app, chunks[2]);
}

fn draw_list_header(frame: &mut Frame, app: &App, area: Rect) {
    let config = app.controller().config();
    let mut lines = vec![Line::from(vec![
        Span::styled(
            config.title,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(config.description, Style::default().fg(Color::DarkGray)),
    ])];

    if app.filter_mode {
        if let Some(spec) = app.current_filter_spec() {
            let value = if app.is_reference_filter(spec) {
                match app.reference_filter_value(spec) {
                    Some(id) => match &spec.kind {
                        FilterKind::Reference(list) => list.label_or_dash(id).to_string(),
                        _ => id.to_string(),
                    },
                    None => "Tous".to_string(),
                }
            } else {
                format!("{}▏", app.filter_input)
            };
            lines.push(Line::from(vec![
                Span::styled("Filtre: ", Style::default().fg(Color::Yellow)),
                Span::raw(format!("{} = {}", spec.label, value)),
            ]));
        }
    } else {
        lines.push(Line::from(Span::styled(
            filter_summary(app),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default().borders(Borders::BOTTOM);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_record_table(frame: &mut Frame, app: &App, area: Rect) {
    let controller = app.controller();
    let config = controller.config();
    let rows = controller.visible();

    if rows.is_empty() {
        let empty = Paragraph::new("Aucun enregistrement trouvé")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(empty, area);
        return;
    }

    let extra = match controller.query.discriminator_value(&config.schema) {
        Some(value) => dynamic_columns(&config.schema.dynamic, value, &rows),
        None => Vec::new(),
    };

    let mut header_cells: Vec<Cell> = Vec::new();
    for (index, key) in config.columns.iter().enumerate() {
        let mut label = config.column_label(key).to_string();
        if controller.query.sort_field == *key {
            label.push(' ');
            label.push_str(controller.query.direction.arrow());
        }
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if index == app.col_cursor {
            style = style.fg(Color::Cyan);
        }
        header_cells.push(Cell::new(label).style(style));
    }
    header_cells.extend(extra.iter().map(|column| {
        Cell::new(column.label.clone()).style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Magenta),
        )
    }));

    let body: Vec<Row> = rows
        .iter()
        .map(|record| {
            let mut cells: Vec<Cell> = config
                .columns
                .iter()
                .map(|key| Cell::new(output::cell_text(config, record, key)))
                .collect();
            cells.extend(
                extra
                    .iter()
                    .map(|column| Cell::new(output::extra_cell_text(record, &column.key))),
            );
            Row::new(cells)
        })
        .collect();

    let column_count = config.columns.len() + extra.len();
    let widths = vec![Constraint::Ratio(1, column_count.max(1) as u32); column_count];

    let table = Table::new(body, widths)
        .header(Row::new(header_cells).bottom_margin(1))
        .row_highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)))
        .highlight_symbol("▸ ");

    let mut state = TableState::default();
    state.select(Some(app.row_cursor.min(rows.len().saturating_sub(1))));
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some((message, is_error)) => {
            let color = if *is_error { Color::Red } else { Color::Green };
            Line::from(Span::styled(message.clone(), Style::default().fg(color)))
        }
        None => {
            let count = app.controller().visible().len();
            let query = &app.controller().query;
            Line::from(Span::styled(
                format!(
                    "{count} enregistrement(s)  ·  tri: {} {}",
                    query.sort_field,
                    query.direction.arrow()
                ),
                Style::default().fg(Color::DarkGray),
            ))
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_form_screen(frame: &mut Frame, app: &App, area: Rect) {
    let controller = app.controller();
    let config = controller.config();
    let Some(form) = controller.form() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let mode_label = match form.mode() {
        chancery_schema::FormMode::Create => "Nouveau",
        chancery_schema::FormMode::Edit => "Modifier",
    };
    let mut title_spans = vec![Span::styled(
        format!("{mode_label} — {}", config.title),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if controller.is_saving() {
        title_spans.push(Span::styled(
            "   Enregistrement...",
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(title_spans)).block(Block::default().borders(Borders::BOTTOM)),
        chunks[0],
    );

    let rows = app.form_rows();
    let label_width = rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);

    // Keep the cursor row on screen with a simple window.
    let height = chunks[1].height as usize;
    let offset = app.form_cursor.saturating_sub(height.saturating_sub(4) / 2);

    let mut lines: Vec<Line> = Vec::new();
    let mut dynamic_started = false;
    for (index, row) in rows.iter().enumerate().skip(offset) {
        if row.dynamic && !dynamic_started {
            dynamic_started = true;
            let heading = form
                .discriminator_value(&config.schema)
                .and_then(|value| {
                    config
                        .schema
                        .field(config.schema.discriminator.unwrap_or_default())
                        .and_then(|field| field.reference.as_ref())
                        .map(|list| list.label_or_dash(value))
                })
                .unwrap_or("Champs spécifiques");
            lines.push(Line::from(Span::styled(
                format!("— {heading} —"),
                Style::default().fg(Color::Magenta),
            )));
        }

        let raw_value = if row.dynamic {
            form.extra_value(&row.key).to_string()
        } else {
            form.value(&row.key).to_string()
        };
        let shown = if index == app.form_cursor && app.editing {
            format!("{}▏", app.input)
        } else {
            display_value(row, &raw_value)
        };

        let cursor = index == app.form_cursor;
        let value_style = if cursor {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(
                    "{} {:>width$}  ",
                    if cursor { "▸" } else { " " },
                    row.label,
                    width = label_width
                ),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(shown, value_style),
        ]));

        if let Some(error) = form.error(&row.key) {
            lines.push(Line::from(Span::styled(
                format!("  {:>width$}  {error}", "", width = label_width),
                Style::default().fg(Color::Red),
            )));
        }
    }
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    draw_status_line(frame, app, chunks[2]);
}

/// Human rendering for a form value: select ids resolve to labels, booleans
/// become checkboxes, blanks show a placeholder.
fn display_value(row: &super::app::FormRow, raw: &str) -> String {
    match row.kind {
        FieldKind::Boolean => {
            if raw.trim() == "true" {
                "[x] oui".to_string()
            } else {
                "[ ] non".to_string()
            }
        }
        FieldKind::Select => {
            let resolved = raw
                .trim()
                .parse::<i64>()
                .ok()
                .and_then(|id| row.reference.as_ref().map(|list| list.label_or_dash(id)));
            match resolved {
                Some(label) => label.to_string(),
                None => "— Sélectionner —".to_string(),
            }
        }
        _ => {
            if raw.trim().is_empty() {
                "·".to_string()
            } else {
                raw.to_string()
            }
        }
    }
}

fn draw_delete_confirm(frame: &mut Frame, app: &App, area: Rect) {
    let config = app.controller().config();
    let subject = app
        .controller()
        .selected_record()
        .map(|record| {
            config
                .columns
                .first()
                .map(|key| output::cell_text(config, record, key))
                .unwrap_or_default()
        })
        .unwrap_or_default();
    modal::render_confirm(
        frame,
        area,
        "Supprimer",
        &format!("Supprimer définitivement « {subject} » ? Cette action est irréversible."),
    );
}

fn draw_inventory(frame: &mut Frame, app: &App, area: Rect) {
    let Some(assets) = app
        .controllers
        .iter()
        .find(|controller| controller.config().key == "assets")
    else {
        return;
    };
    let Some(types) = assets
        .config()
        .schema
        .field("asset_type_id")
        .and_then(|field| field.reference.clone())
    else {
        return;
    };

    let lines: Vec<String> = inventory::summarize(assets.records(), &types)
        .into_iter()
        .map(|line| {
            format!(
                "{:<14} {:<32} x{:<5} {:>12}",
                line.asset_type_name,
                line.asset_name,
                line.quantity,
                output::format_money(line.total_cost)
            )
        })
        .collect();
    modal::render_panel(frame, area, "Inventaire", lines);
}
