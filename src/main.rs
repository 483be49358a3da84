use std::io;

mod demo;
mod domain;
mod reporter;

fn main() {
    // The demonstration always exits with status 0; a failed write is reported on stderr.
    if let Err(error) = demo::run(io::stdout().lock()) {
        eprintln!("{error}");
    }
}
