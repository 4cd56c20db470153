use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::add::sort_entries;
use crate::core::logic::Core;
use crate::core::store::EntryStore;
use crate::errors::AppResult;
use crate::models::summary::DaySummary;
use crate::ui::messages::{header, info};
use crate::ui::render;
use crate::utils::formatting::fmt_float;
use crate::utils::{date, time};
use ansi_term::Colour;

/// Print today's sheet and its summary.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let now = time::resolve_now(cli.now.as_ref())?;
    let today = date::today();
    let store = EntryStore::new(cfg, today);

    if cli.verbose {
        info(format!("Opening {}", store.sheet_path().display()));
    }

    let mut entries = store.load()?;
    sort_entries(&mut entries);

    header(format!("Entries for {}", today));
    println!("{}", render::entries_table(&entries));

    let summary = Core::build_day_summary(&entries, time::minutes_since_midnight(now))?;
    print_summary(&summary);

    Ok(())
}

fn print_summary(summary: &DaySummary) {
    header("Major entries");
    println!("{}", render::majors_table(&summary.majors));

    header("Sums across contexts");
    println!("{}", render::contexts_table(&summary.contexts));

    println!(
        "Total hours: {}",
        Colour::Green.bold().paint(fmt_float(summary.total_hours))
    );
}
