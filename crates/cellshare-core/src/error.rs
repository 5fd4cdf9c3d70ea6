//! Error types for the cellshare store.

use std::fmt;

use cellshare_engine::ExprError;
use thiserror::Error;

use crate::access::Access;

/// Kind of named entity, used in duplicate-name errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Sheet,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::User => write!(f, "User"),
            EntityKind::Sheet => write!(f, "Sheet"),
        }
    }
}

/// Errors that can occur in store operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("{kind} \"{name}\" already exists")]
    AlreadyExists { kind: EntityKind, name: String },

    #[error("User \"{0}\" does not exist")]
    UnknownUser(String),

    #[error("Sheet \"{0}\" does not exist")]
    UnknownSheet(String),

    #[error("User \"{user}\" is not allowed to {access} sheet \"{sheet}\"")]
    AccessDenied {
        user: String,
        sheet: String,
        access: Access,
    },

    #[error("Cell ({x}, {y}) is out of range")]
    OutOfRange { x: i64, y: i64 },

    #[error("Parse error: {0}")]
    Parse(#[from] ExprError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
