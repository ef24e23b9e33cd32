//! Output functions for consistent CLI formatting

use super::context::UiContext;
use console::{style, Style};

/// Display a section header
pub fn section(ctx: &UiContext, title: &str) {
    if ctx.use_fancy_output() {
        println!("{}", style(title).cyan().bold());
    } else {
        println!("{}", title);
    }
}

/// Display a success step with detail
pub fn step_ok_detail(ctx: &UiContext, message: &str, detail: &str) {
    let detail = if ctx.use_fancy_output() {
        style(detail).dim().to_string()
    } else {
        detail.to_string()
    };
    println!("  {} {} ({})", marker(ctx, "[OK]", Style::new().green()), message, detail);
}

/// Display a warning step with a hint
pub fn step_warn_hint(ctx: &UiContext, message: &str, hint: &str) {
    println!("  {} {}", marker(ctx, "[WARN]", Style::new().yellow()), message);
    if ctx.use_fancy_output() {
        println!("    {}", style(hint).dim());
    } else {
        println!("    {}", hint);
    }
}

/// Step marker, colored only in fancy mode
fn marker(ctx: &UiContext, label: &str, color: Style) -> String {
    if ctx.use_fancy_output() {
        color.apply_to(label).to_string()
    } else {
        label.to_string()
    }
}

/// Print styled key-value pair
pub fn key_value(ctx: &UiContext, key: &str, value: &str) {
    if ctx.use_fancy_output() {
        println!("  {}: {}", style(key).dim(), value);
    } else {
        println!("  {}: {}", key, value);
    }
}

/// Print styled key-value with status color
pub fn key_value_status(ctx: &UiContext, key: &str, value: &str, ok: bool) {
    let value_style = if ok {
        Style::new().green()
    } else {
        Style::new().yellow()
    };

    if ctx.use_fancy_output() {
        println!("  {}: {}", style(key).dim(), value_style.apply_to(value));
    } else {
        println!("  {}: {}", key, value);
    }
}
