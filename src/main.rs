//! bookshelf entry point
//!
//! Parsing, loading and the menu loop all live in [`bookshelf::cli`]; this
//! only reports a fatal error and sets the exit status.

use bookshelf::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("\n[ERROR] {e:#}\n");
        std::process::exit(1);
    }
}
