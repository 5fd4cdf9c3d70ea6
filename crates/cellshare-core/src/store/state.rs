use crate::access::{Access, PermissionTable};
use crate::error::{Result, StoreError};
use cellshare_engine::{Grid, empty_grid};
use dashmap::{DashMap, DashSet};

/// A sheet's cells together with who may touch them.
///
/// Both live in one map entry so that a permission check and the write it
/// guards happen under the same entry lock.
#[derive(Clone, Debug, Default)]
pub(crate) struct Sheet {
    pub grid: Grid,
    pub permissions: PermissionTable,
}

impl Sheet {
    /// A zeroed sheet whose creator can edit it.
    pub fn new(owner: &str) -> Self {
        Sheet {
            grid: empty_grid(),
            permissions: PermissionTable::with_owner(owner),
        }
    }

    /// Fail with `AccessDenied` unless `user` holds the requested access.
    pub fn require(&self, user: &str, sheet: &str, access: Access) -> Result<()> {
        if self.permissions.level(user).allows(access) {
            Ok(())
        } else {
            Err(StoreError::AccessDenied {
                user: user.to_string(),
                sheet: sheet.to_string(),
                access,
            })
        }
    }
}

/// In-memory store of users and sheets.
///
/// Methods take `&self`. Users sit in a concurrent set and never go away, so
/// an existence check stays valid once it has passed. Each sheet is a single
/// map entry, and every operation that checks permissions and then mutates
/// does both while holding that entry.
///
/// Grids are returned by value; callers never get a handle into the store.
#[derive(Debug, Default)]
pub struct Store {
    /// Registered user names
    pub(crate) users: DashSet<String>,
    /// Sheets keyed by their globally unique name
    pub(crate) sheets: DashMap<String, Sheet>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_user(&self, name: &str) -> bool {
        self.users.contains(name)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Whether a sheet name is taken. This includes entries created by
    /// [`Store::set_permission`] on names that were never created as sheets.
    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub(crate) fn require_user(&self, name: &str) -> Result<()> {
        if self.has_user(name) {
            Ok(())
        } else {
            Err(StoreError::UnknownUser(name.to_string()))
        }
    }
}
