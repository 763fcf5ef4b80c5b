//! Bottom action bar: the key hints available in the current state.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionHint {
    pub key: &'static str,
    pub label: &'static str,
}

impl ActionHint {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Render hints on one line, dropping from the tail when the bar is full.
pub fn render_action_bar(frame: &mut Frame, area: Rect, hints: &[ActionHint]) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let block = Block::default().borders(Borders::TOP);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let mut spans: Vec<Span> = Vec::new();
    let mut used = 0usize;
    let budget = inner.width as usize;
    for hint in hints {
        let width = hint.key.chars().count() + hint.label.chars().count() + 3;
        if used + width > budget {
            break;
        }
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
            used += 2;
        }
        spans.push(Span::styled(
            hint.key,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(hint.label, Style::default().fg(Color::Gray)));
        used += width;
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// Aligned `key  label` lines for the help overlay.
pub fn format_help_lines(hints: &[ActionHint]) -> Vec<String> {
    let key_width = hints
        .iter()
        .map(|hint| hint.key.chars().count())
        .max()
        .unwrap_or(0);
    hints
        .iter()
        .map(|hint| {
            let padding = key_width.saturating_sub(hint.key.chars().count());
            format!("  {}{}  {}", hint.key, " ".repeat(padding), hint.label)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lines_align_on_the_longest_key() {
        let hints = [
            ActionHint::new("Enter", "Valider"),
            ActionHint::new("n", "Nouveau"),
        ];
        let lines = format_help_lines(&hints);
        assert_eq!(lines[0], "  Enter  Valider");
        assert_eq!(lines[1], "  n      Nouveau");
    }
}
