use std::process::ExitCode;

use kinetica::app::run_with_args;
use kinetica::cli::AppArgs;
use kinetica::logging;

fn main() -> ExitCode {
    let args = match AppArgs::parse_or_exit(std::env::args_os()) {
        Ok(args) => args,
        Err(exit) => return exit.into(),
    };

    logging::init(args.log_level);

    run_with_args(&args).into()
}
