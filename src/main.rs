use sastry_lab::config::Config;
use sastry_lab::{logging, output, pipeline};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    logging::init(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    match pipeline::run(stdin.lock(), &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            output::fatal(&err.to_string(), config.color);
            ExitCode::FAILURE
        }
    }
}
