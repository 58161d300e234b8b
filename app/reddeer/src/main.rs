#![allow(clippy::multiple_crate_versions)]

//! RedDeer command-line tool.
//!
//! Inspects the run configurations a RedDeer suite is replicated for and
//! emits the configuration file schema.

fn main() {
    reddeer::logging::init();

    if let Err(err) = reddeer::cli::run() {
        eprintln!("reddeer: {err}");
        std::process::exit(1);
    }
}
