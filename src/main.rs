use std::process;

use envseal::cli;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
