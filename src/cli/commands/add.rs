use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::form::RecordForm;
use crate::core::repository::EventRepository;
use crate::errors::AppResult;
use crate::store::RecordStore;

/// Handle the `add` command: the input form.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        sole,
        start,
        finish,
        event,
        key_point,
    } = cmd
    {
        let form = RecordForm {
            sole: sole.clone(),
            start: start.clone(),
            finish: finish.clone(),
            event: event.clone(),
            key_point: key_point.clone(),
        };

        // Validate before touching the store, so a typo never creates a file.
        form.validate()?;

        let mut repo = EventRepository::open(RecordStore::new(cfg.store_path()))?;
        AddLogic::apply(&mut repo, &form)?;
    }

    Ok(())
}
