/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

/// Flag cells are greyed out when false, so the True flags stand out in
/// the entries table.
pub fn colorize_flag(value: bool) -> String {
    if value {
        "True".to_string()
    } else {
        format!("{}False{}", GREY, RESET)
    }
}
