//! Windowed table component.
//!
//! Renders a large ordered row sequence inside a fixed viewport, touching
//! only the rows currently scrolled into view plus a small overscan margin.
//! The component never owns row data: callers hand it a row count and a
//! getter, and the visible index range is recomputed against the current
//! count on every render, so a shrinking row set (after a filter pass) never
//! leaves a stale index behind.

use std::ops::Range;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::data::Record;
use crate::ui::Theme;

/// Rows fetched beyond each edge of the viewport for smooth scrolling.
pub const OVERSCAN_ROWS: usize = 2;

/// One column of the table: which record field it shows and how.
#[derive(Debug, Clone)]
pub struct Column {
    /// Record field key resolved through [`Record::field`]. A key that does
    /// not name a field renders as a blank cell.
    pub key: String,
    /// Header label.
    pub label: String,
    /// Column width in terminal cells.
    pub width: u16,
    /// Numeric columns are right-aligned.
    pub numeric: bool,
}

impl Column {
    /// Create a left-aligned column.
    pub fn new(key: impl Into<String>, label: impl Into<String>, width: u16) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            width,
            numeric: false,
        }
    }

    /// Mark the column numeric (right-aligned).
    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }
}

/// The windowed table widget.
///
/// Owns only presentation state: scroll offset, the row cursor, and the
/// viewport height measured at the last render.
#[derive(Debug, Clone)]
pub struct VirtualTable {
    columns: Vec<Column>,
    row_height: u16,
    header_height: u16,
    /// Whether rows can be activated. Enables the row cursor highlight, the
    /// terminal analogue of the hover affordance a click handler brings.
    activatable: bool,
    /// Index of the first row in the viewport.
    offset: usize,
    /// Row the cursor is on. Meaningful only when `activatable`.
    cursor: usize,
    /// Full row slots that fit the body area, measured at the last render.
    viewport_rows: usize,
}

impl VirtualTable {
    /// Create a table with one-line rows and a one-line header.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            row_height: 1,
            header_height: 1,
            activatable: false,
            offset: 0,
            cursor: 0,
            viewport_rows: 0,
        }
    }

    /// Set the height of each row slot, in terminal lines (minimum 1).
    pub fn row_height(mut self, height: u16) -> Self {
        self.row_height = height.max(1);
        self
    }

    /// Set the header height, in terminal lines.
    pub fn header_height(mut self, height: u16) -> Self {
        self.header_height = height.max(1);
        self
    }

    /// Enable row activation (cursor highlight plus Enter handling).
    pub fn activatable(mut self) -> Self {
        self.activatable = true;
        self
    }

    /// The row under the cursor, if activation is enabled and a row exists.
    pub fn selected(&self, row_count: usize) -> Option<usize> {
        if self.activatable && row_count > 0 {
            Some(self.cursor.min(row_count - 1))
        } else {
            None
        }
    }

    /// Move one row up.
    pub fn move_up(&mut self, row_count: usize) {
        if self.activatable {
            self.cursor = self.cursor.saturating_sub(1);
        } else {
            self.offset = self.offset.saturating_sub(1);
        }
        self.clamp(row_count);
    }

    /// Move one row down.
    pub fn move_down(&mut self, row_count: usize) {
        if self.activatable {
            self.cursor = self.cursor.saturating_add(1);
        } else {
            self.offset = self.offset.saturating_add(1);
        }
        self.clamp(row_count);
    }

    /// Move one viewport up.
    pub fn page_up(&mut self, row_count: usize) {
        let page = self.viewport_rows.max(1);
        if self.activatable {
            self.cursor = self.cursor.saturating_sub(page);
        } else {
            self.offset = self.offset.saturating_sub(page);
        }
        self.clamp(row_count);
    }

    /// Move one viewport down.
    pub fn page_down(&mut self, row_count: usize) {
        let page = self.viewport_rows.max(1);
        if self.activatable {
            self.cursor = self.cursor.saturating_add(page);
        } else {
            self.offset = self.offset.saturating_add(page);
        }
        self.clamp(row_count);
    }

    /// Jump to the first row.
    pub fn home(&mut self, row_count: usize) {
        self.cursor = 0;
        self.offset = 0;
        self.clamp(row_count);
    }

    /// Jump to the last row.
    pub fn end(&mut self, row_count: usize) {
        self.cursor = row_count.saturating_sub(1);
        self.offset = row_count.saturating_sub(1);
        self.clamp(row_count);
    }

    /// Clamp scroll state against the current row count and keep the cursor
    /// inside the viewport. Called on every render and after every move, so
    /// the table tolerates the row count changing between renders.
    fn clamp(&mut self, row_count: usize) {
        if row_count == 0 {
            self.offset = 0;
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.min(row_count - 1);

        let max_offset = row_count.saturating_sub(self.viewport_rows.max(1));
        self.offset = self.offset.min(max_offset);

        if self.activatable {
            if self.cursor < self.offset {
                self.offset = self.cursor;
            } else if self.viewport_rows > 0 && self.cursor >= self.offset + self.viewport_rows {
                self.offset = self.cursor + 1 - self.viewport_rows;
            }
        }
    }

    /// Render header and visible rows into `area`.
    ///
    /// `row_getter` must be defined for every index in `0..row_count`; it is
    /// never called outside that range.
    pub fn render<'a, F>(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        row_count: usize,
        row_getter: F,
        theme: &Theme,
    ) where
        F: Fn(usize) -> &'a Record,
    {
        let header_height = self.header_height.min(area.height);
        let header_area = Rect {
            height: header_height,
            ..area
        };
        let body_area = Rect {
            y: area.y + header_height,
            height: area.height - header_height,
            ..area
        };

        self.viewport_rows = (body_area.height / self.row_height) as usize;
        self.clamp(row_count);

        self.render_header(frame, header_area, theme);

        for index in self.fetch_range(row_count) {
            let record = row_getter(index);
            // Overscanned rows are fetched but sit outside the body area.
            if index < self.offset {
                continue;
            }
            let slot = (index - self.offset) as u16 * self.row_height;
            if slot + self.row_height > body_area.height {
                continue;
            }
            let row_area = Rect {
                y: body_area.y + slot,
                height: self.row_height,
                ..body_area
            };
            let is_cursor_row = self.selected(row_count) == Some(index);
            self.render_row(frame, row_area, record, is_cursor_row, theme);
        }
    }

    /// The index range fetched for the current viewport, overscan included,
    /// clamped to `0..row_count`.
    fn fetch_range(&self, row_count: usize) -> Range<usize> {
        visible_range(self.offset, self.viewport_rows, OVERSCAN_ROWS, row_count)
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let areas = self.column_areas(area);
        for (column, cell_area) in self.columns.iter().zip(areas.iter()) {
            let header = Paragraph::new(column.label.clone())
                .alignment(cell_alignment(column))
                .style(
                    Style::default()
                        .fg(theme.fg)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                );
            frame.render_widget(header, *cell_area);
        }
    }

    fn render_row(
        &self,
        frame: &mut Frame,
        area: Rect,
        record: &Record,
        is_cursor_row: bool,
        theme: &Theme,
    ) {
        let style = if is_cursor_row {
            Style::default().fg(theme.fg).bg(theme.cursor_bg)
        } else {
            Style::default().fg(theme.fg)
        };
        if is_cursor_row {
            frame.render_widget(Block::default().style(style), area);
        }

        let areas = self.column_areas(area);
        for (column, cell_area) in self.columns.iter().zip(areas.iter()) {
            // Unknown keys render blank: caller misconfiguration, not an error.
            let text = record.field(&column.key).unwrap_or_default();
            let cell = Paragraph::new(text)
                .alignment(cell_alignment(column))
                .style(style);
            frame.render_widget(cell, *cell_area);
        }
    }

    /// Split an area into per-column cells by declared widths, with a
    /// one-cell gap between columns.
    fn column_areas(&self, area: Rect) -> Vec<Rect> {
        let constraints: Vec<Constraint> = self
            .columns
            .iter()
            .map(|c| Constraint::Length(c.width))
            .chain(std::iter::once(Constraint::Min(0)))
            .collect();
        Layout::horizontal(constraints)
            .spacing(1)
            .split(area)
            .iter()
            .take(self.columns.len())
            .copied()
            .collect()
    }
}

fn cell_alignment(column: &Column) -> Alignment {
    if column.numeric {
        Alignment::Right
    } else {
        Alignment::Left
    }
}

/// The row index range a viewport at `offset` must fetch, extended by
/// `overscan` on both edges and clamped to `0..row_count`.
fn visible_range(offset: usize, viewport_rows: usize, overscan: usize, row_count: usize) -> Range<usize> {
    if row_count == 0 || viewport_rows == 0 {
        return 0..0;
    }
    let offset = offset.min(row_count - 1);
    let start = offset.saturating_sub(overscan);
    let end = (offset + viewport_rows + overscan).min(row_count);
    start..end
}
