//! CLI context - bundles settings, flags, and clipboard state.

use std::io::Write;

use copypasta::{ClipboardContext, ClipboardProvider};
use log::debug;
use zeroize::Zeroize;

use super::{CliFlags, Error, parse_length, print_help, prompts, quiet};
use crate::settings::Settings;
use securepass::{entropy, generate_password};

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    pub fn new(flags: CliFlags, settings: Settings) -> Self {
        Self {
            settings,
            flags,
            clipboard: None,
        }
    }

    /// Generate and emit one password. `warnings` come from loading settings
    /// and are shown once quiet mode is known.
    pub fn run(&mut self, warnings: &[String]) -> Result<(), Error> {
        if self.flags.help {
            print_help();
            return Ok(());
        }
        if self.flags.version {
            println!("securepass {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }

        self.apply_flags();
        quiet::set(self.settings.quiet);
        for warning in warnings {
            prompts::warn(warning);
        }

        if !self.open_clipboard() {
            return Ok(());
        }

        let length = self.resolve_length()?;
        debug!("entropy source: {}", entropy::source_name());

        let mut password = generate_password(length)?;
        let result = self.emit(&password);
        password.zeroize();
        result
    }

    /// Apply CLI flags over settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.length = Some(len);
        }
        if self.flags.clipboard {
            self.settings.to_clipboard = true;
        }
        if self.flags.quiet {
            self.settings.quiet = true;
        }
    }

    /// Returns false when the clipboard is unavailable and the user
    /// declined to print instead.
    fn open_clipboard(&mut self) -> bool {
        if !self.settings.to_clipboard {
            return true;
        }
        match ClipboardContext::new() {
            Ok(ctx) => {
                self.clipboard = Some(ctx);
                true
            }
            Err(e) => {
                debug!("clipboard unavailable: {e}");
                if prompts::clipboard_fallback_prompt() {
                    self.settings.to_clipboard = false;
                    true
                } else {
                    false
                }
            }
        }
    }

    fn resolve_length(&self) -> Result<usize, Error> {
        if let Some(len) = self.settings.length {
            return Ok(len);
        }
        let input = prompts::read_length()?;
        Ok(parse_length(&input)?)
    }

    fn emit(&mut self, password: &str) -> Result<(), Error> {
        if let Some(ctx) = self.clipboard.as_mut() {
            ctx.set_contents(password.to_owned())
                .map_err(|e| Error::Clipboard(e.to_string()))?;
            if let Ok(mut retrieved) = ctx.get_contents() {
                retrieved.zeroize();
            }
            prompts::clipboard_copied();
            return Ok(());
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "{password}")?;
        out.flush()?;
        Ok(())
    }
}
