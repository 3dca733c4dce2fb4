use securepass::{MAX_LENGTH, MIN_LENGTH};
use securepass::pass::charset::{self, CharClass};

use super::LOG_VAR;
use crate::settings::{CLIPBOARD_VAR, LENGTH_VAR, QUIET_VAR};
use crate::terminal::{box_bottom, box_line, box_opt, box_top};

/// Help text as box-drawn lines.
pub fn help_lines() -> Vec<String> {
    let mut lines = vec![
        box_top("securepass"),
        box_line("Password generator with guaranteed character-class coverage"),
        box_line(""),
        box_line("USAGE:"),
        box_line("  securepass [OPTIONS]"),
        box_line(""),
        box_line("OPTIONS:"),
    ];
    let opts = [
        (
            "  -l, --length <N>",
            format!(
                "Characters per password, {MIN_LENGTH} to {MAX_LENGTH}. Prompted for when omitted."
            ),
        ),
        (
            "  -b, --board",
            "Copy to clipboard instead of printing".to_string(),
        ),
        ("  -q, --quiet", "Suppress prompts and warnings".to_string()),
        ("      --verbose", "Debug logging to stderr".to_string()),
        ("  -h, --help", "Show this help".to_string()),
        ("  -v, --version", "Show version".to_string()),
    ];
    for (flag, desc) in &opts {
        lines.extend(box_opt(flag, desc));
    }

    lines.push(box_line(""));
    lines.push(box_line("ENVIRONMENT:"));
    lines.extend(box_opt(
        &format!("  {LENGTH_VAR}"),
        "Length used when --length is omitted",
    ));
    lines.extend(box_opt(&format!("  {CLIPBOARD_VAR}"), "Same as --board"));
    lines.extend(box_opt(&format!("  {QUIET_VAR}"), "Same as --quiet"));
    lines.extend(box_opt(&format!("  {LOG_VAR}"), "Log filter (default: warn)"));

    lines.push(box_line(""));
    lines.push(box_line(&format!(
        "Every password holds one or more of each class ({} chars):",
        charset::size()
    )));
    for class in CharClass::ALL {
        let chars: String = class.chars().iter().map(|&b| char::from(b)).collect();
        lines.push(box_line(&format!("  {:<10}{chars}", class.name())));
    }
    lines.push(box_bottom());
    lines
}

/// Print help to stdout.
pub fn print_help() {
    for line in help_lines() {
        println!("{line}");
    }
}
