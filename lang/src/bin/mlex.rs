use monkey_lang::repl;

fn main() {
    // Logging stays quiet unless RUST_LOG asks for it, the output stream belongs to the tokens.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = repl::start(stdin.lock(), stdout.lock()) {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}
