use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::ChartLogic;
use crate::core::repository::EventRepository;
use crate::errors::AppResult;
use crate::store::{RecordStore, audit};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart {
        search,
        file,
        format,
        force,
    } = cmd
    {
        let repo = EventRepository::open(RecordStore::new(cfg.store_path()))?;
        let (path, count) = ChartLogic::write(repo.current(), cfg, search, file, *format, *force)?;

        audit::ttlog_quiet(
            repo.store().path(),
            "chart",
            &path.to_string_lossy(),
            &format!("{count} event(s), search '{search}'"),
        );
    }
    Ok(())
}
