use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reset::ResetLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { backup, force } = cmd {
        let store = RecordStore::new(cfg.store_path());
        ResetLogic::reset(&store, backup.as_deref(), *force)?;
    }

    Ok(())
}
