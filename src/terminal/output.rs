//! Terminal output utilities.
//!
//! Lines are returned as strings, not printed.

pub const BOX_WIDTH: usize = 64;

const FLAG_COL: usize = 24;

/// Box top with optional title: ┌─ Title ──────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        return format!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    }
    let title_part = format!("─ {title} ");
    let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
    format!("┌{}{}┐", title_part, "─".repeat(remaining))
}

/// Box content line: │ content      │
pub fn box_line(content: &str) -> String {
    let padding = inner_width().saturating_sub(content.chars().count());
    format!("│ {}{} │", content, " ".repeat(padding))
}

pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Flag in the left column, description word-wrapped in the right.
pub fn box_opt(flag: &str, desc: &str) -> Vec<String> {
    let desc_col = inner_width() - FLAG_COL;
    let mut wrapped: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in desc.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > desc_col {
            wrapped.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || wrapped.is_empty() {
        wrapped.push(current);
    }

    wrapped
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let left = if i == 0 { flag } else { "" };
            box_line(&format!("{left:<width$}{text}", width = FLAG_COL))
        })
        .collect()
}

#[inline]
fn inner_width() -> usize {
    BOX_WIDTH - 4
}
