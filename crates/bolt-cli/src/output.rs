//! Terminal output formatting for the bolt CLI, via the [`console`] crate.

use console::style;

/// Print a bold cyan header with a dimmed underline.
pub fn print_header(text: &str) {
    println!("\n{}\n{}", style(text).bold().cyan(), style("-".repeat(text.len())).dim());
}

/// Print a success message prefixed with green `[OK]`.
pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green().bold(), text);
}

/// Print a progress step indicator like `[1/2] Creating project directory`.
pub fn print_step(step: usize, total: usize, text: &str) {
    println!("{} {}", style(format!("[{step}/{total}]")).dim(), text);
}
