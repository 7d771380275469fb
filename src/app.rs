//! Main application state and event dispatch.
//!
//! The page shell: a one-line header bar, the customers panel, and a status
//! bar. All work runs on one thread in response to discrete events; the draw
//! loop in `main` renders, then hands the next event to [`App::handle_event`].

use rand::thread_rng;
use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use tracing::{info, trace, warn};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::data::RowStore;
use crate::events::Event;
use crate::ui::{CustomersAction, CustomersView, Theme};

/// The main application struct that holds all state.
pub struct App {
    /// Whether the application should quit.
    should_quit: bool,
    /// The immutable row store, generated once at startup.
    store: RowStore,
    /// The customers panel.
    customers: CustomersView,
    /// Active color theme.
    theme: Theme,
    /// Last activated record id, shown in the status bar.
    last_activated: Option<u32>,
}

impl App {
    /// Create the application from resolved configuration.
    pub fn new(config: &Config) -> Self {
        let store = RowStore::generate(config.rows, &mut thread_rng());
        if store.is_empty() {
            warn!("row store is empty; the table will render headers only");
        }
        let customers =
            CustomersView::new(&store, std::time::Duration::from_millis(config.debounce_ms));
        info!(rows = store.len(), debounce_ms = config.debounce_ms, "application ready");

        Self {
            should_quit: false,
            store,
            customers,
            theme: Theme::named(&config.theme),
            last_activated: None,
        }
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle one application event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Tick => self.customers.on_tick(&self.store),
            Event::Resize(width, height) => {
                // The next draw re-measures the viewport from the frame area.
                trace!(width, height, "terminal resized");
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => self.quit(),
            (KeyCode::Esc, _) => {
                if self.customers.has_filter() {
                    self.customers.clear_filter(&self.store);
                } else {
                    self.quit();
                }
            }
            _ => match self.customers.handle_key(key, &self.store) {
                CustomersAction::Activated(id) => self.last_activated = Some(id),
                CustomersAction::None => {}
            },
        }
    }

    fn quit(&mut self) {
        info!("quit requested");
        self.should_quit = true;
    }

    /// Render the whole page.
    pub fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let header = Paragraph::new(" custview").style(
            Style::default()
                .fg(self.theme.bg)
                .bg(self.theme.highlight)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(header, chunks[0]);

        self.customers
            .render(frame, chunks[1], &self.store, &self.theme);

        let mut status = format!(
            " {}/{} customers",
            self.customers.shown(),
            self.store.len()
        );
        if self.customers.is_typing() {
            status.push_str("  filtering\u{2026}");
        }
        if let Some(id) = self.last_activated {
            status.push_str(&format!("  selected #{}", id));
        }
        status.push_str("  |  type to filter, Esc clear/quit, Enter select");
        let status_bar = Paragraph::new(status).style(Style::default().fg(self.theme.dim));
        frame.render_widget(status_bar, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(rows: usize) -> App {
        let config = Config {
            rows,
            ..Config::default()
        };
        App::new(&config)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = test_app(10);
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit());
    }

    #[test]
    fn test_esc_clears_filter_before_quitting() {
        let mut app = test_app(10);
        app.handle_event(key(KeyCode::Char('x')));
        assert!(app.customers.has_filter());

        app.handle_event(key(KeyCode::Esc));
        assert!(!app.customers.has_filter());
        assert!(!app.should_quit());

        app.handle_event(key(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn test_tick_drives_the_debounce() {
        let config = Config {
            rows: 10,
            debounce_ms: 0,
            ..Config::default()
        };
        let mut app = App::new(&config);
        app.handle_event(key(KeyCode::Char('z')));
        assert!(app.customers.is_typing());

        // Zero debounce: the deadline has already passed on the next tick.
        app.handle_event(Event::Tick);
        assert!(!app.customers.is_typing());
        assert_eq!(app.customers.shown(), 0);
    }

    #[test]
    fn test_enter_records_activation() {
        let mut app = test_app(10);
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.last_activated, Some(1));
    }
}
