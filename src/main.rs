use clap::Parser;
use std::process::ExitCode;

use wordimperfect::cli::{self, CliArgs};
use wordimperfect::app::domain::EditorSettings;
use wordimperfect::app::infrastructure::logging;

fn main() -> ExitCode {
    logging::init();

    let args = CliArgs::parse();
    let settings = EditorSettings::load();

    match cli::run(args, &settings) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
