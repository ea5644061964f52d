mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use error::AppError;
use output::{output_report_json, print_summary, print_warning};
use utils::set_debug;

fn main() {
    let cli = Cli::parse();
    let cli = if cli.no_config {
        cli
    } else {
        cli.with_config(&Config::load())
    };

    set_debug(cli.debug);
    let json = cli.json;

    if let Err(e) = run(cli, json) {
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli, json: bool) -> Result<(), AppError> {
    let options = cli.into_options()?;
    let report = crate::core::run(&options, print_warning)?;

    if json {
        println!("{}", output_report_json(&report));
    } else {
        print_summary(&report);
    }
    Ok(())
}
