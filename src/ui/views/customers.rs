//! The customers panel.
//!
//! Composes the filter input, the panel title, and the windowed table, and
//! owns the filter state: the query text, the trailing-edge debounce
//! deadline, and the currently displayed row indices.
//!
//! The panel is a two-state machine. It is `Settled` when no deadline is
//! pending (initially, and after every filter pass) and `Typing` from the
//! first keystroke that edits the query until the deadline fires. Each edit
//! overwrites the deadline, so a burst of keystrokes produces exactly one
//! filter evaluation, using the text of the last keystroke.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::{debug, trace};

use crate::data::{filter_indices, RowStore};
use crate::ui::{Column, TextInput, Theme, VirtualTable};

/// Result of handling a key in the customers panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomersAction {
    /// Nothing for the caller to do.
    None,
    /// The row cursor activated the record with this id.
    Activated(u32),
}

/// The customers panel: title, filter input, and windowed table.
pub struct CustomersView {
    /// The filter input.
    input: TextInput,
    /// The windowed table over the displayed rows.
    table: VirtualTable,
    /// Indices into the row store, in store order.
    displayed: Vec<usize>,
    /// Debounce deadline; `Some` while a filter pass is pending.
    pending: Option<Instant>,
    /// Quiet period required after the last keystroke.
    debounce: Duration,
}

impl CustomersView {
    /// Create the panel over `store`, showing every row.
    pub fn new(store: &RowStore, debounce: Duration) -> Self {
        let mut input = TextInput::new();
        input.set_placeholder("Filter");

        let columns = vec![
            Column::new("id", "ID", 6),
            Column::new("name", "Name", 16),
            Column::new("email", "Email", 20),
            Column::new("age", "Age", 4).numeric(),
        ];

        Self {
            input,
            table: VirtualTable::new(columns).activatable(),
            displayed: filter_indices(store.records(), ""),
            pending: None,
            debounce,
        }
    }

    /// The current filter text.
    pub fn query(&self) -> &str {
        self.input.value()
    }

    /// Whether a filter pass is pending (the `Typing` state).
    pub fn is_typing(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether any filter text is present.
    pub fn has_filter(&self) -> bool {
        !self.input.is_empty()
    }

    /// How many rows are currently displayed.
    pub fn shown(&self) -> usize {
        self.displayed.len()
    }

    /// Clear the filter and immediately show every row again.
    pub fn clear_filter(&mut self, store: &RowStore) {
        self.input.clear();
        self.pending = None;
        self.displayed = filter_indices(store.records(), "");
        debug!("filter cleared");
    }

    /// Handle a key event.
    ///
    /// Navigation keys, Home/End included, address the table; text-cursor
    /// motion inside the input is limited to Left/Right. An expired debounce
    /// deadline fires before the key is interpreted, so a stream of key
    /// repeats arriving faster than the tick rate cannot postpone a due
    /// filter pass.
    pub fn handle_key(&mut self, key: KeyEvent, store: &RowStore) -> CustomersAction {
        self.fire_due(store, Instant::now());
        match key.code {
            KeyCode::Up => self.table.move_up(self.displayed.len()),
            KeyCode::Down => self.table.move_down(self.displayed.len()),
            KeyCode::PageUp => self.table.page_up(self.displayed.len()),
            KeyCode::PageDown => self.table.page_down(self.displayed.len()),
            KeyCode::Home => self.table.home(self.displayed.len()),
            KeyCode::End => self.table.end(self.displayed.len()),
            KeyCode::Enter => {
                if let Some(selected) = self.table.selected(self.displayed.len()) {
                    if let Some(record) = store.get(self.displayed[selected]) {
                        debug!(id = record.id, name = %record.name, "row activated");
                        return CustomersAction::Activated(record.id);
                    }
                }
            }
            _ => {
                if self.input.handle_input(key) {
                    // Every edit overwrites the pending deadline.
                    self.pending = Some(Instant::now() + self.debounce);
                    trace!(query = %self.input.value(), "debounce armed");
                }
            }
        }
        CustomersAction::None
    }

    /// Advance the debounce clock. Called on every event-loop tick.
    pub fn on_tick(&mut self, store: &RowStore) {
        self.fire_due(store, Instant::now());
    }

    /// Run the filter if the pending deadline has passed at `now`.
    fn fire_due(&mut self, store: &RowStore, now: Instant) {
        let Some(deadline) = self.pending else {
            return;
        };
        if now < deadline {
            return;
        }
        self.pending = None;
        self.displayed = filter_indices(store.records(), self.input.value());
        debug!(
            query = %self.query(),
            shown = self.displayed.len(),
            total = store.len(),
            "filter applied"
        );
    }

    /// Render the panel into `area`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, store: &RowStore, theme: &Theme) {
        let card = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.dim));
        let inner = card.inner(area);
        frame.render_widget(card, area);

        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(inner);
        let top = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[0]);

        let title = Paragraph::new("Customers")
            .style(Style::default().fg(theme.fg).add_modifier(Modifier::BOLD));
        frame.render_widget(title, top[0]);
        self.input.render(frame, top[1], "Filter", theme);

        let displayed = &self.displayed;
        let records = store.records();
        self.table.render(
            frame,
            chunks[1],
            displayed.len(),
            |i| &records[displayed[i]],
            theme,
        );
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::data::Record;

    const DEBOUNCE: Duration = Duration::from_millis(500);

    fn two_row_store() -> RowStore {
        RowStore::from_records(vec![
            Record::new(1, "Customer 1", "email1@user.com", 24),
            Record::new(2, "Customer 2", "email2@user.com", 28),
        ])
    }

    fn type_text(view: &mut CustomersView, store: &RowStore, text: &str) {
        for c in text.chars() {
            view.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), store);
        }
    }

    #[test]
    fn test_starts_settled_showing_all_rows() {
        let store = two_row_store();
        let view = CustomersView::new(&store, DEBOUNCE);
        assert!(!view.is_typing());
        assert_eq!(view.shown(), 2);
    }

    #[test]
    fn test_keystroke_arms_debounce_without_filtering() {
        let store = two_row_store();
        let mut view = CustomersView::new(&store, DEBOUNCE);
        type_text(&mut view, &store, "email2");
        assert!(view.is_typing());
        // No filter pass has happened yet.
        assert_eq!(view.shown(), 2);
    }

    #[test]
    fn test_deadline_fires_once_with_last_text() {
        let store = two_row_store();
        let mut view = CustomersView::new(&store, DEBOUNCE);
        let start = Instant::now();

        // A burst of keystrokes, each within the debounce window.
        type_text(&mut view, &store, "email2");

        // A tick before the deadline does nothing.
        view.fire_due(&store, start);
        assert!(view.is_typing());
        assert_eq!(view.shown(), 2);

        // A tick past the deadline runs exactly one pass with the final text.
        view.fire_due(&store, start + DEBOUNCE + Duration::from_millis(600));
        assert!(!view.is_typing());
        assert_eq!(view.shown(), 1);
        assert_eq!(view.query(), "email2");

        // Further ticks are no-ops.
        view.fire_due(&store, start + Duration::from_secs(60));
        assert_eq!(view.shown(), 1);
    }

    #[test]
    fn test_query_survives_the_filter_pass() {
        // The typed text stays in the input after the filter applies; only
        // Esc clears it.
        let store = two_row_store();
        let mut view = CustomersView::new(&store, DEBOUNCE);
        type_text(&mut view, &store, "Customer");
        view.fire_due(&store, Instant::now() + DEBOUNCE * 2);
        assert_eq!(view.query(), "Customer");
    }

    #[test]
    fn test_expired_deadline_fires_on_the_next_key() {
        // No tick arrives while keys are held down; an already-due filter
        // pass must still run on the next key event.
        let store = two_row_store();
        let mut view = CustomersView::new(&store, Duration::from_millis(0));
        type_text(&mut view, &store, "email2");
        assert!(view.is_typing());

        view.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE), &store);
        assert!(!view.is_typing());
        assert_eq!(view.shown(), 1);
    }

    #[test]
    fn test_home_moves_the_table_not_the_text_cursor() {
        // If Home reached the input, the next character would land at the
        // start of the query.
        let store = two_row_store();
        let mut view = CustomersView::new(&store, DEBOUNCE);
        type_text(&mut view, &store, "ab");
        view.handle_key(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE), &store);
        type_text(&mut view, &store, "c");
        assert_eq!(view.query(), "abc");
    }

    #[test]
    fn test_no_match_displays_zero_rows() {
        let store = two_row_store();
        let mut view = CustomersView::new(&store, DEBOUNCE);
        type_text(&mut view, &store, "zzz");
        view.fire_due(&store, Instant::now() + DEBOUNCE * 2);
        assert_eq!(view.shown(), 0);
    }

    #[test]
    fn test_clear_filter_restores_all_rows() {
        let store = two_row_store();
        let mut view = CustomersView::new(&store, DEBOUNCE);
        type_text(&mut view, &store, "email2");
        view.fire_due(&store, Instant::now() + DEBOUNCE * 2);
        assert_eq!(view.shown(), 1);

        view.clear_filter(&store);
        assert!(!view.has_filter());
        assert!(!view.is_typing());
        assert_eq!(view.shown(), 2);
    }

    #[test]
    fn test_navigation_does_not_touch_filter_state() {
        let store = two_row_store();
        let mut view = CustomersView::new(&store, DEBOUNCE);
        view.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE), &store);
        view.handle_key(KeyEvent::new(KeyCode::End, KeyModifiers::NONE), &store);
        assert!(!view.is_typing());
        assert_eq!(view.shown(), 2);
    }

    #[test]
    fn test_enter_activates_selected_record() {
        let store = two_row_store();
        let mut view = CustomersView::new(&store, DEBOUNCE);
        view.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE), &store);
        let action = view.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &store);
        assert_eq!(action, CustomersAction::Activated(2));
    }

    #[test]
    fn test_activation_follows_the_filtered_view() {
        // With the filter applied, the first displayed row is record 2.
        let store = two_row_store();
        let mut view = CustomersView::new(&store, DEBOUNCE);
        type_text(&mut view, &store, "email2");
        view.fire_due(&store, Instant::now() + DEBOUNCE * 2);

        let action = view.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &store);
        assert_eq!(action, CustomersAction::Activated(2));
    }

    #[test]
    fn test_debounce_over_generated_store() {
        let mut rng = StdRng::seed_from_u64(1);
        let store = RowStore::generate(5000, &mut rng);
        let mut view = CustomersView::new(&store, DEBOUNCE);
        assert_eq!(view.shown(), 5000);

        type_text(&mut view, &store, "email2@");
        view.fire_due(&store, Instant::now() + DEBOUNCE * 2);
        assert!(view.shown() > 0);
        assert!(view.shown() < 5000);
    }
}
