//! Command-line options for the `mal` binary.

use thiserror::Error;

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Script to run instead of the REPL.
    pub file: Option<String>,
    /// Bound to `*ARGV*`.
    pub argv: Vec<String>,
    /// Skip the `load-file` bootstrap.
    pub skip_init: bool,
    pub help: bool,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("unknown option '{0}'")]
    UnknownFlag(String),
}

/// Parse arguments, excluding the program name.
///
/// Flags are recognized only before the script path. Everything after the
/// script belongs to the script and goes to `*ARGV*` untouched.
pub fn parse_options<I, S>(args: I) -> Result<Options, OptionsError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--skip-init" | "--skipInit" => options.skip_init = true,
            "--help" | "-h" => options.help = true,
            "--" => {
                if let Some(file) = args.next() {
                    options.file = Some(file);
                }
                break;
            }
            flag if flag.starts_with('-') => {
                return Err(OptionsError::UnknownFlag(arg));
            }
            _ => {
                options.file = Some(arg);
                break;
            }
        }
    }

    options.argv = args.collect();
    Ok(options)
}

/// Print usage to stdout.
pub fn print_usage() {
    println!("Usage: mal [options] [FILE] [ARGS...]");
    println!();
    println!("Without FILE, starts an interactive session.");
    println!("With FILE, loads it and exits. ARGS are bound to *ARGV*.");
    println!();
    println!("Options:");
    println!("  --skip-init    Do not define load-file at startup");
    println!("  -h, --help     Show this help");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=mal_eval=debug) to enable tracing.");
}
