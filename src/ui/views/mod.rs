//! Application views (screens).

mod customers;

pub use customers::{CustomersAction, CustomersView};
