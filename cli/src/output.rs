//! Terminal rendering. Data goes to stdout, diagnostics to stderr.

use colored::{ColoredString, Colorize};

/// Column the value starts at in `name: value` lines.
const LABEL_WIDTH: usize = 24;

pub fn header(title: &str) {
    println!("{}", title.bold().underline());
}

pub fn subheader(title: &str) {
    println!("{}", title.bold());
}

pub fn field(name: &str, value: &str) {
    println!("{}", field_line(name, value));
}

pub fn hint(msg: &str) {
    println!("{}", tagged("hint:".cyan().bold(), msg.dimmed()));
}

pub fn warn(msg: &str) {
    eprintln!("{}", tagged("warning:".yellow().bold(), msg.normal()));
}

pub fn error(msg: &str) {
    eprintln!("{}", tagged("error:".red().bold(), msg.normal()));
}

pub fn success(msg: &str) {
    println!("{}", tagged("✓".green().bold(), msg.normal()));
}

/// Pads before colouring so escape codes do not count towards the width.
fn field_line(name: &str, value: &str) -> String {
    let label = format!("{name}:");
    format!("  {} {value}", format!("{label:<LABEL_WIDTH$}").dimmed())
}

fn tagged(tag: ColoredString, msg: ColoredString) -> String {
    format!("{tag} {msg}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain<T>(f: impl FnOnce() -> T) -> T {
        colored::control::set_override(false);
        f()
    }

    #[test]
    fn test_field_line_aligns_values() {
        let engine = plain(|| field_line("engine", "sqlite"));
        let url = plain(|| field_line("url", "sqlite:///srv/db.sqlite3"));

        assert_eq!(engine, format!("  {:<24} sqlite", "engine:"));
        assert_eq!(engine.find("sqlite"), url.find("sqlite://"));
    }

    #[test]
    fn test_field_line_keeps_long_labels_whole() {
        let line = plain(|| field_line("a label longer than the column", "v"));
        assert_eq!(line, "  a label longer than the column: v");
    }

    #[test]
    fn test_tagged_joins_tag_and_message() {
        let line = plain(|| tagged("warning:".yellow().bold(), "DB_HOST unset".normal()));
        assert_eq!(line, "warning: DB_HOST unset");
    }

    #[test]
    fn test_printers_do_not_panic() {
        header("Settings");
        subheader("Database");
        field("debug", "false");
        hint("set DB_HOST");
        warn("credentials incomplete");
        error("missing secret key");
        success("settings are valid");
    }
}
