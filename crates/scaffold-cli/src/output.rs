//! Terminal output formatting for the scaffold CLI.
//!
//! Provides consistent, colored output using the [`console`] crate.

use console::style;

use scaffold_core::layout::PlannedPath;

/// Print a bold cyan header with an underline separator.
pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().cyan());
    println!("{}", style("=".repeat(text.len())).dim());
}

/// Print a success message prefixed with green `[OK]`.
pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green().bold(), text);
}

/// Print a key-value pair with dimmed key formatting.
pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print one entry of a dry-run plan. Directories are bold blue.
pub fn print_planned(entry: &PlannedPath) {
    if entry.is_dir() {
        println!("{}", style(entry).bold().blue());
    } else {
        println!("{entry}");
    }
}
