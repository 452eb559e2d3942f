use std::sync::Arc;

use colored::Colorize;

/// Receives human-readable progress output: a message and an optional title.
pub type Logger = Arc<dyn Fn(&str, Option<&str>) + Send + Sync>;

/// Prints to stdout, with the title highlighted.
pub fn default_logger() -> Logger {
    Arc::new(|output: &str, title: Option<&str>| match title {
        Some(title) => println!("{} {}", title.bright_cyan().bold(), output),
        None => println!("{output}"),
    })
}

/// Discards everything.
pub fn silent_logger() -> Logger {
    Arc::new(|_: &str, _: Option<&str>| {})
}

/// `"1 seed"`, `"3 migrations"`: a count with a naively pluralized noun.
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
