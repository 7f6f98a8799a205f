//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = homeward_cli::run() {
        eprintln!("homeward: {err}");
        std::process::exit(1);
    }
}
