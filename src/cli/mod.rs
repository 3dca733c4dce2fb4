mod context;
mod error;
mod flags;
mod help;
mod parse;
pub mod prompts;
mod quiet;

use env_logger::Env;
use log::LevelFilter;

use crate::settings::Settings;

pub use context::Context;
pub use error::Error;
pub use flags::CliFlags;
pub use help::print_help;
pub use parse::{ParseError, parse, parse_length};

/// Overrides the default `warn` log filter.
pub const LOG_VAR: &str = "SECUREPASS_LOG";

/// Parse arguments, load settings and generate one password.
pub fn run(args: &[String]) -> Result<(), Error> {
    let flags = parse(args)?;
    init_logging(flags.verbose);

    let (settings, warnings) = Settings::from_env();
    let mut ctx = Context::new(flags, settings);
    ctx.run(&warnings)
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().filter_or(LOG_VAR, "warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None);
    // Already initialised when run more than once in-process.
    let _ = builder.try_init();
}
