use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::export::confirm;
use crate::models::Table;
use crate::store::{RecordStore, audit};
use crate::ui::messages::{success, warning};

/// Recovery path for a store that no longer loads.
pub struct ResetLogic;

impl ResetLogic {
    /// Replace the backing file with an empty canonical table.
    ///
    /// With `backup_to` the current bytes are copied first; if that copy is
    /// declined or fails, the store is left untouched. Returns `false` when
    /// the user cancels.
    pub fn reset(store: &RecordStore, backup_to: Option<&str>, force: bool) -> AppResult<bool> {
        if !force {
            warning(format!(
                "This will discard every event in '{}'.",
                store.path().display()
            ));
            if !confirm("Reset the store? [y/N]: ")? {
                warning("Reset cancelled by user.");
                return Ok(false);
            }
        }

        if let Some(dest) = backup_to
            && store.exists()
            && BackupLogic::backup(store.path(), dest, false, force)?.is_none()
        {
            warning("Reset cancelled: the backup was not written.");
            return Ok(false);
        }

        store.save(&Table::default())?;
        success(format!("Store reset: {}", store.path().display()));

        audit::ttlog_quiet(
            store.path(),
            "reset",
            &store.path().to_string_lossy(),
            match backup_to {
                Some(dest) => format!("Store emptied, previous content saved to {dest}"),
                None => "Store emptied".to_string(),
            }
            .as_str(),
        );

        Ok(true)
    }
}
