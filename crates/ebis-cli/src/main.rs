//! EBİS Karekod Generator
//!
//! A CLI tool that serializes concrete delivery waybills into the
//! GS-delimited EBİS wire format and renders them as karekods.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
