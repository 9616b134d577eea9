//! gitinbit - command-line front end for the blog's UI core.
//!
//! Every invocation parses arguments, runs one command and exits. Errors are
//! printed to stderr and turn into exit code 1.

fn main() {
    if let Err(err) = gitinbit_lib::cli::run() {
        eprintln!("gitinbit: {err}");
        std::process::exit(1);
    }
}
