//! Centered modal dialogs over a cleared scrim.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn centered_rect(area: Rect, max_width: u16, max_height: u16) -> Rect {
    let width = area.width.min(max_width);
    let height = area.height.min(max_height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// A confirmation dialog: message body plus a `y/n` footer hint.
pub fn render_confirm(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let dialog = centered_rect(area, 60, 7);
    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(message).wrap(Wrap { trim: true }),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new("y: Confirmer    n/Esc: Annuler")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        chunks[1],
    );
}

/// A scrollable text panel used by the help overlay.
pub fn render_panel(frame: &mut Frame, area: Rect, title: &str, lines: Vec<String>) {
    let height = (lines.len() as u16 + 4).min(area.height);
    let dialog = centered_rect(area, 64, height);
    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL);
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let text: Vec<Line> = lines.into_iter().map(Line::from).collect();
    frame.render_widget(Paragraph::new(text), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_clamps_to_the_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(area, 60, 7);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 7);
        assert_eq!(rect.y, 1);
    }
}
