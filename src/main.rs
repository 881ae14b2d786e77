use chess_rules::cli;

fn main() {
    env_logger::init();
    if let Err(err) = cli::run_terminal_loop() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
