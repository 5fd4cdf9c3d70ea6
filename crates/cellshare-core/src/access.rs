//! Access levels and per-sheet permission tables.
//!
//! A user who is missing from a sheet's table has [`AccessLevel::None`].
//! Entries are only ever added or overwritten, so once a user can read a sheet
//! they keep at least read access for the rest of the session.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// What a user may do with a sheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccessLevel {
    /// Not present in the permission table.
    #[default]
    None,
    ReadOnly,
    Editable,
}

impl AccessLevel {
    pub fn can_read(self) -> bool {
        self >= AccessLevel::ReadOnly
    }

    pub fn can_write(self) -> bool {
        self == AccessLevel::Editable
    }

    /// Whether this level satisfies the requested kind of access.
    pub fn allows(self, access: Access) -> bool {
        match access {
            Access::Read => self.can_read(),
            Access::Edit => self.can_write(),
        }
    }
}

impl From<bool> for AccessLevel {
    fn from(editable: bool) -> Self {
        if editable {
            AccessLevel::Editable
        } else {
            AccessLevel::ReadOnly
        }
    }
}

impl FromStr for AccessLevel {
    type Err = String;

    /// Parses the two grantable levels. `None` cannot be granted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ReadOnly" => Ok(AccessLevel::ReadOnly),
            "Editable" => Ok(AccessLevel::Editable),
            other => Err(format!("Invalid access level: {}", other)),
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessLevel::None => write!(f, "None"),
            AccessLevel::ReadOnly => write!(f, "ReadOnly"),
            AccessLevel::Editable => write!(f, "Editable"),
        }
    }
}

/// Kind of access an operation needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Read,
    Edit,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Read => write!(f, "read"),
            Access::Edit => write!(f, "edit"),
        }
    }
}

/// Users with access to one sheet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PermissionTable {
    entries: BTreeMap<String, bool>,
}

impl PermissionTable {
    /// A table whose only entry is `owner` with edit rights.
    pub fn with_owner(owner: &str) -> Self {
        let mut table = PermissionTable::default();
        table.set(owner, true);
        table
    }

    pub fn level(&self, user: &str) -> AccessLevel {
        self.entries
            .get(user)
            .map_or(AccessLevel::None, |editable| AccessLevel::from(*editable))
    }

    /// Insert or overwrite the entry for `user`.
    pub fn set(&mut self, user: &str, editable: bool) {
        self.entries.insert(user.to_string(), editable);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_user_has_no_access() {
        let table = PermissionTable::with_owner("alice");
        assert_eq!(table.level("bob"), AccessLevel::None);
        assert!(!table.level("bob").can_read());
        assert!(!table.level("bob").can_write());
    }

    #[test]
    fn test_read_only_reads_but_does_not_write() {
        let mut table = PermissionTable::with_owner("alice");
        table.set("bob", false);
        assert_eq!(table.level("bob"), AccessLevel::ReadOnly);
        assert!(table.level("bob").allows(Access::Read));
        assert!(!table.level("bob").allows(Access::Edit));
    }

    #[test]
    fn test_set_overwrites_without_duplicating() {
        let mut table = PermissionTable::with_owner("alice");
        table.set("alice", false);
        table.set("alice", true);
        assert_eq!(table, PermissionTable::with_owner("alice"));
        assert_eq!(table.level("alice"), AccessLevel::Editable);
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!("Editable".parse::<AccessLevel>(), Ok(AccessLevel::Editable));
        assert_eq!("ReadOnly".parse::<AccessLevel>(), Ok(AccessLevel::ReadOnly));
        assert!("None".parse::<AccessLevel>().is_err());
        assert!("editable".parse::<AccessLevel>().is_err());
    }
}
