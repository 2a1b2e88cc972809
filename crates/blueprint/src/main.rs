//! # Blueprint CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, this file
//! only invokes `cli::run()` and turns errors into an exit code.
//!
//! ```text
//! blueprint tags notes.txt --dictionary tags.json
//! blueprint video "https://youtu.be/5qap5aO4i9A"
//! blueprint since "2024-03-14 12:00:00"
//! blueprint paginate --total 30 --page 2
//! blueprint profile anonymous --data snapshot.json --page 2
//! ```
//!
//! All the logic lives in the `blueprintapp` library; see its crate docs for
//! the layering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
