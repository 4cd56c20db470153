use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the timesheet directory holding the per-day sheets
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rtasklog…");

    if let Some(custom) = &cli.dir {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    println!("🎉 rtasklog initialization completed!");
    Ok(())
}
