//! Terminal user interface: the navigation rail, one table view and one
//! form view shared by every module.

pub mod app;
pub mod components;
pub mod event;
pub mod keymap;
pub mod nav;
pub mod ui;

use crate::config::AppConfig;
use anyhow::Result;
use clap::Args;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, prelude::*, Terminal};
use std::io::stdout;
use std::time::Duration;

use app::App;
use event::{Event, EventHandler};

/// TUI command arguments
#[derive(Debug, Default, Args)]
pub struct TuiArgs {
    /// Tick rate override in milliseconds
    #[arg(long)]
    pub tick_rate: Option<u64>,
}

/// Run the TUI
pub async fn run(args: TuiArgs, config: AppConfig) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(args.tick_rate.unwrap_or(config.tick_rate_ms));
    let mut app = App::new(config);
    let mut events = EventHandler::new(tick_rate);

    let result = run_app(&mut terminal, &mut app, &mut events).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Run the application loop
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        match events.next().await {
            Event::Key(key) => app.handle_key(key).await,
            Event::Tick => app.tick().await,
            Event::Resize(_, _) => {} // Ratatui handles resize
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ViewMode;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    #[test]
    fn app_starts_in_list_mode() {
        let app = App::new(AppConfig::default());
        assert_eq!(app.controller().mode(), ViewMode::List);
        assert!(app.running);
    }

    #[test]
    fn list_screen_renders_without_panic() {
        let backend = TestBackend::new(120, 36);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = App::new(AppConfig::default());
        terminal.draw(|frame| ui::draw(frame, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer.area.width, 120);
        assert_eq!(buffer.area.height, 36);
    }

    #[tokio::test]
    async fn form_and_overlays_render_without_panic() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = App::new(AppConfig::default());

        // Form view.
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE))
            .await;
        terminal.draw(|frame| ui::draw(frame, &app)).unwrap();

        // Delete confirmation over the list.
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .await;
        app.handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE))
            .await;
        terminal.draw(|frame| ui::draw(frame, &app)).unwrap();

        // Help overlay.
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .await;
        app.handle_key(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE))
            .await;
        terminal.draw(|frame| ui::draw(frame, &app)).unwrap();
    }

    #[tokio::test]
    async fn empty_filter_result_shows_the_empty_state() {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = App::new(AppConfig::default());

        app.handle_key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE))
            .await;
        for c in "zzzz".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .await;
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .await;
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .await;
        assert!(app.controller().visible().is_empty());

        terminal.draw(|frame| ui::draw(frame, &app)).unwrap();
        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("Aucun enregistrement"));
    }
}
