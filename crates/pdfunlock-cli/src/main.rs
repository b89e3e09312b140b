mod check_cmd;
mod cli;
mod logging;
mod remove_cmd;
mod shared;
mod status_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let result = match cli.command {
        cli::Commands::Remove {
            ref files,
            ref password,
            ref format,
            no_verify,
            max_input_bytes,
        } => remove_cmd::run(
            files,
            password,
            format,
            no_verify,
            max_input_bytes,
            cli.quiet,
        ),
        cli::Commands::Check {
            ref files,
            ref password,
            ref format,
        } => check_cmd::run(files, password, format, cli.quiet),
        cli::Commands::Status {
            ref files,
            ref format,
        } => status_cmd::run(files, format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
