//! Terminal styling helpers for the final status line

use console::style;
use std::path::Path;

/// Print the success line naming the written output file
pub fn print_converted(output: &Path) {
    println!(
        "{} File successfully converted to {}",
        style("✓").green().bold(),
        style(output.display()).cyan()
    );
}

/// Print the failure line
pub fn print_failed() {
    println!("{} File conversion failed.", style("✗").red().bold());
}
