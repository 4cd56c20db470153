use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::add::{AddLogic, sort_entries};
use crate::core::store::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::render;
use crate::utils::formatting::bold;
use crate::utils::{date, time};

/// Add one entry to today's sheet and persist the updated list.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Write {
        description,
        stop,
        time: explicit_time,
        context,
        minor,
    } = &cli.command
    {
        let now = time::resolve_now(cli.now.as_ref())?;
        let store = EntryStore::new(cfg, date::today());

        if cli.verbose {
            info(format!("Opening {}", store.sheet_path().display()));
        }

        //
        // 1. Load and sort today's entries
        //
        let mut entries = store.load()?;
        sort_entries(&mut entries);

        //
        // 2. Build the new entry and insert it in time order
        //
        let description = description.as_deref().unwrap_or("");
        AddLogic::apply(
            &mut entries,
            description,
            explicit_time.as_ref(),
            context.as_ref(),
            *stop,
            *minor,
            now,
        )?;

        //
        // 3. Show the updated sheet, then persist it (backup first)
        //
        println!("{}", bold("New entries"));
        println!("{}", render::entries_table(&entries));

        store.persist(&entries, cli.verbose)?;

        success(format!("Sheet updated: {}", store.sheet_path().display()));
    }

    Ok(())
}
