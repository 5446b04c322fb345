//! Terminal styling utilities

use console::{style, Emoji};

// Emoji icons with fallbacks for terminals that don't support them
pub static LINK: Emoji<'_, '_> = Emoji("🔗 ", ">> ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!("  {}{}", LINK, style("linkmig").cyan().bold());
    println!(
        "  {}",
        style("Shortcut link config migration").dim()
    );
    println!("  {}", style(format!("v{}", version)).dim());
    println!("  {}", style("─".repeat(40)).dim());
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("  {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("  {} {}", INFO, message);
}

/// Print a warning, used for per-field migration diagnostics
pub fn print_warning(message: &str) {
    println!("  {} {}", WARN, style(message).yellow());
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "  {} {}",
        style("✓").green().bold(),
        style("Config file updated!").green().bold()
    );
    println!();
}
