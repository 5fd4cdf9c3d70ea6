//! The sheet store: users, sheets and their permission tables.

mod ops;
mod permissions;
mod state;

pub use state::Store;
