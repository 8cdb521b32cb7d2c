//! `mal` command-line entry point.

use std::process::ExitCode;

use mal_eval::{stdout_handler, Interpreter};
use malc::options::print_usage;
use malc::{init_tracing, parse_options, run_file, run_repl};

fn main() -> ExitCode {
    init_tracing();

    let options = match parse_options(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    if options.help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    tracing::debug!(?options, "starting");

    let built = Interpreter::builder()
        .print_handler(stdout_handler())
        .argv(options.argv)
        .bootstrap(!options.skip_init)
        .build();
    let mut interpreter = match built {
        Ok(interpreter) => interpreter,
        Err(err) => {
            eprintln!("*** Init failed ({})", err.message());
            return ExitCode::FAILURE;
        }
    };

    if let Some(path) = options.file {
        return match run_file(&mut interpreter, &path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("*** {}", err.message());
                ExitCode::FAILURE
            }
        };
    }

    match run_repl(&mut interpreter, std::io::stdin().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: failed to read input: {err}");
            ExitCode::FAILURE
        }
    }
}
