//! Environment layer.

use super::Settings;

pub const LENGTH_VAR: &str = "SECUREPASS_LENGTH";
pub const CLIPBOARD_VAR: &str = "SECUREPASS_CLIPBOARD";
pub const QUIET_VAR: &str = "SECUREPASS_QUIET";

/// Overlay environment values on `settings`, returning one warning per
/// unusable variable.
pub fn apply<F>(settings: &mut Settings, lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    if let Some(raw) = lookup(LENGTH_VAR) {
        match raw.trim().parse::<usize>() {
            Ok(len) => settings.length = Some(len),
            Err(_) => warnings.push(format!("Ignoring {LENGTH_VAR}={raw}: not a length")),
        }
    }

    for (var, field) in [
        (CLIPBOARD_VAR, &mut settings.to_clipboard),
        (QUIET_VAR, &mut settings.quiet),
    ] {
        if let Some(raw) = lookup(var) {
            match parse_bool(&raw) {
                Some(value) => *field = value,
                None => warnings.push(format!("Ignoring {var}={raw}: expected true or false")),
            }
        }
    }

    warnings
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> (Settings, Vec<String>) {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let (settings, warnings) = load(&[]);
        assert_eq!(settings, Settings::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn reads_all_vars() {
        let (settings, warnings) = load(&[
            (LENGTH_VAR, " 24 "),
            (CLIPBOARD_VAR, "yes"),
            (QUIET_VAR, "1"),
        ]);
        assert!(warnings.is_empty());
        assert_eq!(settings.length, Some(24));
        assert!(settings.to_clipboard);
        assert!(settings.quiet);
    }

    #[test]
    fn short_length_is_kept_for_the_generator_to_reject() {
        let (settings, warnings) = load(&[(LENGTH_VAR, "2")]);
        assert!(warnings.is_empty());
        assert_eq!(settings.length, Some(2));
    }

    #[test]
    fn invalid_values_warn_and_fall_back() {
        let (settings, warnings) = load(&[
            (LENGTH_VAR, "twelve"),
            (CLIPBOARD_VAR, "maybe"),
        ]);
        assert_eq!(settings, Settings::default());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains(LENGTH_VAR));
        assert!(warnings[1].contains(CLIPBOARD_VAR));
    }
}
