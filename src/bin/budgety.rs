use std::process;

fn main() {
    if let Err(err) = budgety::cli::run_cli() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
