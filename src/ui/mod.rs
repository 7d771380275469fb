//! User interface components and views.
//!
//! This module contains all TUI rendering logic: reusable components plus the
//! customers view that composes them.

mod components;
pub mod theme;
mod views;

pub use components::{Column, TextInput, VirtualTable, OVERSCAN_ROWS};
pub use theme::Theme;
pub use views::{CustomersAction, CustomersView};
