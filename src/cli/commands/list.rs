use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::query;
use crate::core::repository::EventRepository;
use crate::core::timeline::{render_axis_summary, render_table};
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::{header, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { search } = cmd {
        let repo = EventRepository::open(RecordStore::new(cfg.store_path()))?;
        let rows = query(repo.current(), search)?;

        if rows.is_empty() {
            if search.is_empty() {
                info("No events recorded yet.");
            } else {
                info(format!("No events for identities matching '{}'.", search));
            }
            return Ok(());
        }

        header(&cfg.page_title);
        print!("{}", render_table(&rows, cfg));
        println!();
        print!("{}", render_axis_summary(&rows, cfg));
    }
    Ok(())
}
