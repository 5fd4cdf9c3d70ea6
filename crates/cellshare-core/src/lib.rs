//! cellshare-core - In-memory, access-controlled store of users and sheets.

pub mod access;
pub mod error;
pub mod store;

pub use access::{Access, AccessLevel, PermissionTable};
pub use error::{EntityKind, Result, StoreError};
pub use store::Store;

pub use cellshare_engine::{CellPos, GRID_SIZE, Grid, OperatorRule};
