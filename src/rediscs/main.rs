//! Thin binary: all terminal handling lives in `cli/`, the parsing and client
//! logic in the `rediscs` library.

mod cli;

fn main() {
    match cli::run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            cli::render::print_error(&e);
            std::process::exit(1);
        }
    }
}
