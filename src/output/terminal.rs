//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::classify::CoarseLabel;
use crate::result::{SummaryRow, TraitResult};

/// Format a trait result's summary table for human-readable terminal output.
///
/// Uses ANSI colors and Unicode box drawing, one line per surviving
/// category or category pair.
pub fn format_summary(result: &TraitResult) -> String {
    let mut output = String::new();

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&result.key.bold().to_string()));
    output.push_str(&format_box_separator());

    let level_str = format!(
        "Credible level: {:.0}%",
        result.credible_level * 100.0
    );
    output.push_str(&format_box_line(&level_str));
    output.push_str(&format_box_separator());

    if result.summary.is_empty() {
        output.push_str(&format_box_line(
            &"(no cells above the species-count threshold)".dimmed().to_string(),
        ));
    }
    for row in &result.summary {
        output.push_str(&format_box_line(&format_row(row)));
    }

    output.push_str(&format_box_bottom());
    output
}

fn format_row(row: &SummaryRow) -> String {
    let cell = match &row.level_b {
        Some(b) => format!("{} / {}", row.level_a, b),
        None => row.level_a.clone(),
    };
    let interval = format!(
        "{:+.1}% [{:+.1}%, {:+.1}%]",
        row.median * 100.0,
        row.lower * 100.0,
        row.upper * 100.0
    );
    format!(
        "{:<24} {:<26} {} (n={})",
        cell,
        interval,
        format_label(row),
        row.n_species
    )
}

fn format_label(row: &SummaryRow) -> String {
    let text = row.fine.to_string();
    match row.coarse {
        CoarseLabel::Increase => text.green().to_string(),
        CoarseLabel::Stable => text.normal().to_string(),
        CoarseLabel::Decrease => text.red().to_string(),
        CoarseLabel::Uncertain => text.yellow().to_string(),
    }
}

// Box drawing helpers

const BOX_WIDTH: usize = 76;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    // Strip ANSI codes for length calculation
    let visible_len = strip_ansi_codes(content).chars().count();
    let padding = if visible_len < BOX_WIDTH - 2 {
        BOX_WIDTH - 2 - visible_len
    } else {
        0
    };
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

/// Strip ANSI escape codes for accurate length calculation.
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of ANSI sequence)
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}
