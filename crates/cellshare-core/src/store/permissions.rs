use super::state::{Sheet, Store};
use crate::access::{Access, AccessLevel};
use crate::error::{Result, StoreError};
use tracing::{debug, warn};

impl Store {
    /// Access `user` currently has on `sheet`. Unknown names have no access.
    pub fn access_level(&self, user: &str, sheet: &str) -> AccessLevel {
        self.sheets
            .get(sheet)
            .map_or(AccessLevel::None, |entry| entry.permissions.level(user))
    }

    /// Sheets `user` can at least read, sorted by name.
    pub fn sheets_for(&self, user: &str) -> Vec<(String, AccessLevel)> {
        let mut sheets: Vec<(String, AccessLevel)> = self
            .sheets
            .iter()
            .filter_map(|entry| {
                let level = entry.permissions.level(user);
                level.can_read().then(|| (entry.key().clone(), level))
            })
            .collect();
        sheets.sort();
        sheets
    }

    /// Insert or overwrite `user`'s entry on `sheet` without any checks.
    ///
    /// Neither the user nor the sheet has to exist. An unknown sheet name gets
    /// a fresh zeroed entry holding only this permission, and from then on the
    /// name counts as taken. Both cases are logged as warnings. Use
    /// [`Store::grant_permission`] for the checked variant.
    pub fn set_permission(&self, user: &str, sheet: &str, editable: bool) -> Result<()> {
        if !self.has_user(user) {
            warn!(user, sheet, "unchecked permission change for an unregistered user");
        }
        let mut entry = self.sheets.entry(sheet.to_string()).or_insert_with(|| {
            warn!(user, sheet, "unchecked permission change created a stray sheet");
            Sheet::default()
        });
        entry.permissions.set(user, editable);
        debug!(user, sheet, level = %AccessLevel::from(editable), "set permission");
        Ok(())
    }

    /// Set `user`'s access on `sheet` on behalf of `actor`.
    ///
    /// Both users and the sheet must exist, and the actor must be able to
    /// edit the sheet.
    pub fn grant_permission(
        &self,
        actor: &str,
        user: &str,
        sheet: &str,
        editable: bool,
    ) -> Result<()> {
        self.require_user(actor)?;
        self.require_user(user)?;
        let mut entry = self
            .sheets
            .get_mut(sheet)
            .ok_or_else(|| StoreError::UnknownSheet(sheet.to_string()))?;
        entry.require(actor, sheet, Access::Edit)?;

        entry.permissions.set(user, editable);
        debug!(actor, user, sheet, level = %AccessLevel::from(editable), "granted permission");
        Ok(())
    }

    /// Give `collaborator` edit access to a sheet `user` can edit.
    ///
    /// The acting user's access is checked before the collaborator is looked
    /// up, so a user without edit rights always gets `AccessDenied`.
    pub fn add_collaborator(&self, user: &str, sheet: &str, collaborator: &str) -> Result<()> {
        self.require_user(user)?;
        let mut entry = self
            .sheets
            .get_mut(sheet)
            .ok_or_else(|| StoreError::UnknownSheet(sheet.to_string()))?;
        entry.require(user, sheet, Access::Edit)?;
        self.require_user(collaborator)?;

        entry.permissions.set(collaborator, true);
        debug!(user, sheet, collaborator, "added collaborator");
        Ok(())
    }
}
