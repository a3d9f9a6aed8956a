fn main() {
    if let Err(e) = isfet_ph_rs::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
