use person_scaffold::utils::logger::{self, LogFormat};
use std::process::ExitCode;

fn main() -> ExitCode {
    logger::init_cli_logger(LogFormat::from_env());

    person_scaffold::execute(std::env::args_os())
}
