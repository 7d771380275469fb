//! Customer records, the row store, and the filter engine.
//!
//! This is the data side of the application: an immutable in-memory store of
//! synthetic customer records plus a pure substring filter over it. All UI
//! state (scroll position, filter text, debounce) lives in the `ui` layer.

mod filter;
mod record;
mod store;

pub use filter::filter_indices;
pub use record::Record;
pub use store::{RowStore, DEFAULT_ROW_COUNT};
