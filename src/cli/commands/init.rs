use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{RecordStore, audit};
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the backing store, created empty with its header if missing
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    info("Initializing rTimeline…");

    //
    // 1️⃣ CONFIGURAZIONE
    //
    // In test mode the config file is left alone and the store given with
    // --store (already applied to `cfg`) is used as-is.
    //
    let effective = if cli.test {
        cfg.clone()
    } else {
        let fresh = Config::for_init(cli.store.as_deref());
        let path = fresh.save()?;
        success(format!("Config file : {}", path.display()));
        fresh
    };

    //
    // 2️⃣ STORE
    //
    let store = RecordStore::new(effective.store_path());
    let existed = store.exists();
    let table = store.load()?;

    if existed {
        success(format!(
            "Store       : {} ({} event(s))",
            store.path().display(),
            table.len()
        ));
    } else {
        success(format!("Store       : {} (created)", store.path().display()));
    }

    //
    // 3️⃣ LOG INTERNO (non bloccante)
    //
    audit::ttlog_quiet(
        store.path(),
        "init",
        &store.path().to_string_lossy(),
        "Store initialized",
    );

    success("rTimeline initialization completed!");
    Ok(())
}
