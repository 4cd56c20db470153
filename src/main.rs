//! rtasklog main entrypoint.

use rtasklog::run;
use rtasklog::ui::messages;

fn main() {
    println!();
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
