//! Platform error handling and argument parsing.

use crate::core::cli::CliArgs;

/// Install a panic hook that logs the panic before the default report.
pub fn init_panic_handling() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        bevy::log::error!("Glance panicked: {info}");
        default_hook(info);
    }));
}

/// Print an application error to stderr and exit with code 1.
pub fn handle_error(error: anyhow::Error) {
    eprintln!();
    eprintln!("Error starting Glance:");
    eprintln!("{error:#}");
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}

/// Parse command line arguments.
pub fn get_cli_args() -> CliArgs {
    use clap::Parser;
    CliArgs::parse()
}
