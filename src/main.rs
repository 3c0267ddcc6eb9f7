use std::process::exit;

fn main() {
    if let Err(e) = ideapod::run() {
        eprintln!("error: {}", e);
        exit(1);
    }
}
