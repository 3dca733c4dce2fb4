use std::env;
use std::process::ExitCode;

mod cli;
mod settings;
mod terminal;

fn main() -> ExitCode {
    disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Keep generated passwords out of core dumps and ptrace.
#[cfg(target_os = "linux")]
fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
fn disable_core_dumps() {}
