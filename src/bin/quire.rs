use std::process::exit;

use env_logger::Env;
use quire::run;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
