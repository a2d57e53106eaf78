use std::process;

use clap::Parser;
use rentbook::{cli::Cli, init};

fn main() {
    init();
    let cli = Cli::parse();

    match rentbook::cli::execute(&cli) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}
