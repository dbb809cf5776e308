fn main() {
    if let Err(e) = beansec_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
