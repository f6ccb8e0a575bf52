use clap::Parser;
use movetrack_cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    #[cfg(unix)]
    restore_default_sigpipe();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// `movetrack list | head` must end quietly instead of panicking on a closed pipe
#[cfg(unix)]
fn restore_default_sigpipe() {
    // SAFETY: runs once at startup, before any other thread exists
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
