//! A file preview gallery built with Rust and the Bevy game engine.
//!
//! Every card remembers the edge the pointer came in through.

use glance::core;

fn main() {
    core::platform::init_panic_handling();
    let cli_args = core::platform::get_cli_args();
    match core::run_app(cli_args) {
        Ok(()) => {}
        Err(error) => core::platform::handle_error(error),
    }
}
