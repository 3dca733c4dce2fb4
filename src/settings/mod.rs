//! Runtime settings: defaults, then environment, then CLI flags.

mod env;

pub use env::{CLIPBOARD_VAR, LENGTH_VAR, QUIET_VAR};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// None means ask on the terminal.
    pub length: Option<usize>,
    pub to_clipboard: bool,
    pub quiet: bool,
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through `lookup`, returning warnings for values that
    /// were present but unusable.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        let warnings = env::apply(&mut settings, lookup);
        (settings, warnings)
    }
}
