use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::repository::EventRepository;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::{RecordStore, audit};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        search,
        force,
    } = cmd
    {
        let repo = EventRepository::open(RecordStore::new(cfg.store_path()))?;
        let count = ExportLogic::export(repo.current(), *format, file, search, *force)?;

        if count > 0 {
            audit::ttlog_quiet(
                repo.store().path(),
                "export",
                file,
                &format!("{count} row(s) as {}", format.as_str()),
            );
        }
    }
    Ok(())
}
