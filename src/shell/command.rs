use cellshare_core::{AccessLevel, Grid, OperatorRule, Result, Store};

/// Entry picked from the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    CreateUser,
    CreateSheet,
    CheckSheet,
    UpdateCell,
    ChangePermission,
    Collaborate,
    ListSheets,
}

impl MenuChoice {
    pub fn from_token(token: &str) -> Option<MenuChoice> {
        match token {
            "1" => Some(MenuChoice::CreateUser),
            "2" => Some(MenuChoice::CreateSheet),
            "3" => Some(MenuChoice::CheckSheet),
            "4" => Some(MenuChoice::UpdateCell),
            "5" => Some(MenuChoice::ChangePermission),
            "6" => Some(MenuChoice::Collaborate),
            "7" => Some(MenuChoice::ListSheets),
            _ => None,
        }
    }
}

/// A fully read shell command, ready to run against the store.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    CreateUser {
        name: String,
    },
    CreateSheet {
        owner: String,
        sheet: String,
    },
    CheckSheet {
        user: String,
        sheet: String,
    },
    UpdateCell {
        user: String,
        sheet: String,
        x: i64,
        y: i64,
        expr: String,
    },
    /// Unchecked permission change.
    SetPermission {
        user: String,
        sheet: String,
        level: AccessLevel,
    },
    /// Permission change on behalf of an editor of the sheet.
    GrantPermission {
        actor: String,
        user: String,
        sheet: String,
        level: AccessLevel,
    },
    Collaborate {
        user: String,
        sheet: String,
        collaborator: String,
    },
    ListSheets {
        user: String,
    },
}

/// Successful result of a command.
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    Message(String),
    Grid(Grid),
    Sheets(Vec<(String, AccessLevel)>),
}

impl Command {
    pub fn execute(&self, store: &Store, rule: OperatorRule) -> Result<Reply> {
        match self {
            Command::CreateUser { name } => {
                store.create_user(name)?;
                Ok(Reply::Message(format!("Create a user named \"{}\".", name)))
            }
            Command::CreateSheet { owner, sheet } => {
                store.create_sheet(owner, sheet)?;
                Ok(Reply::Message(format!(
                    "Create a sheet named \"{}\" for \"{}\".",
                    sheet, owner
                )))
            }
            Command::CheckSheet { user, sheet } => store.get_sheet(user, sheet).map(Reply::Grid),
            Command::UpdateCell {
                user,
                sheet,
                x,
                y,
                expr,
            } => store
                .update_cell_from_input(user, sheet, *x, *y, expr, rule)
                .map(Reply::Grid),
            Command::SetPermission { user, sheet, level } => {
                store.set_permission(user, sheet, level.can_write())?;
                Ok(Reply::Message(format!(
                    "Set \"{}\"'s access to \"{}\" to {}.",
                    user, sheet, level
                )))
            }
            Command::GrantPermission {
                actor,
                user,
                sheet,
                level,
            } => {
                store.grant_permission(actor, user, sheet, level.can_write())?;
                Ok(Reply::Message(format!(
                    "Set \"{}\"'s access to \"{}\" to {}.",
                    user, sheet, level
                )))
            }
            Command::Collaborate {
                user,
                sheet,
                collaborator,
            } => {
                store.add_collaborator(user, sheet, collaborator)?;
                Ok(Reply::Message(format!(
                    "Share \"{}\"'s \"{}\" with \"{}\".",
                    user, sheet, collaborator
                )))
            }
            Command::ListSheets { user } => {
                if !store.has_user(user) {
                    return Err(cellshare_core::StoreError::UnknownUser(user.clone()));
                }
                Ok(Reply::Sheets(store.sheets_for(user)))
            }
        }
    }
}
