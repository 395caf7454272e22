mod cli;

fn main() {
    if let Err(e) = cli::commands::run() {
        eprintln!("Error: {}", e);
        addrbook::logger::flush();
        std::process::exit(1);
    }
    addrbook::logger::flush();
}
