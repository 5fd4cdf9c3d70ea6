use super::state::{Sheet, Store};
use crate::access::Access;
use crate::error::{EntityKind, Result, StoreError};
use cellshare_engine::{CellPos, Grid, OperatorRule, eval_expression};
use dashmap::mapref::entry::Entry;
use tracing::debug;

impl Store {
    /// Register a new user.
    pub fn create_user(&self, name: &str) -> Result<()> {
        if !self.users.insert(name.to_string()) {
            return Err(StoreError::AlreadyExists {
                kind: EntityKind::User,
                name: name.to_string(),
            });
        }
        debug!(user = name, "created user");
        Ok(())
    }

    /// Create a zeroed sheet owned (and editable) by `owner`.
    pub fn create_sheet(&self, owner: &str, sheet: &str) -> Result<()> {
        self.require_user(owner)?;
        match self.sheets.entry(sheet.to_string()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists {
                kind: EntityKind::Sheet,
                name: sheet.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(Sheet::new(owner));
                debug!(owner, sheet, "created sheet");
                Ok(())
            }
        }
    }

    /// Copy of a sheet's grid. Any permission entry grants read access.
    pub fn get_sheet(&self, user: &str, sheet: &str) -> Result<Grid> {
        self.require_user(user)?;
        let entry = self
            .sheets
            .get(sheet)
            .ok_or_else(|| StoreError::UnknownSheet(sheet.to_string()))?;
        entry.require(user, sheet, Access::Read)?;
        Ok(entry.grid)
    }

    /// Overwrite the cell at row `x`, column `y` and return the updated grid.
    ///
    /// Requires edit access. Nothing is written unless every check passes.
    pub fn update_cell(&self, user: &str, sheet: &str, x: i64, y: i64, value: f64) -> Result<Grid> {
        self.require_user(user)?;
        let mut entry = self
            .sheets
            .get_mut(sheet)
            .ok_or_else(|| StoreError::UnknownSheet(sheet.to_string()))?;
        entry.require(user, sheet, Access::Edit)?;
        let pos = CellPos::checked(x, y).ok_or(StoreError::OutOfRange { x, y })?;

        pos.set(&mut entry.grid, value);
        debug!(user, sheet, cell = %pos, value, "updated cell");
        Ok(entry.grid)
    }

    /// Evaluate `input` and write the result with [`Store::update_cell`].
    ///
    /// The expression is evaluated before any store lookup, so a malformed
    /// expression is reported even when the user could not edit the sheet.
    pub fn update_cell_from_input(
        &self,
        user: &str,
        sheet: &str,
        x: i64,
        y: i64,
        input: &str,
        rule: OperatorRule,
    ) -> Result<Grid> {
        let value = eval_expression(input, rule)?;
        self.update_cell(user, sheet, x, y, value)
    }
}
