use clap::Parser;
use revenue_forecast::cli::{self, Cli};
use revenue_forecast::logging::{self, *};
use std::process;

fn main() {
    let cli = Cli::parse();

    let code = match cli::run(cli) {
        Ok(()) => 0,
        Err(err) => {
            error!(DEFAULT, "command failed"; "error" => format!("{:#}", err));
            eprintln!("Error: {:#}", err);
            1
        }
    };

    logging::flush();
    process::exit(code);
}
