//! Reusable UI components.

mod input;
mod virtual_table;

pub use input::TextInput;
pub use virtual_table::{Column, VirtualTable, OVERSCAN_ROWS};
