fn main() {
    budget_tracker::init();

    if let Err(err) = budget_tracker::cli::run_cli() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
