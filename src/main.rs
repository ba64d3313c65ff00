use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use postfixer::{
    Bindings, logging,
    interpreter::provider::parse_binding,
    session::{Session, SessionOptions, Summary},
};
use tracing::error;

/// postfixer evaluates arithmetic expressions with `+ - * /`, parentheses,
/// variables and the functions `sin`, `cos` and `sqrt`.
///
/// Without CONTENTS it reads expressions from standard input until `exit`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells postfixer to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Binds a variable before evaluation, e.g. `--var x=2.5`. May be
    /// repeated.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    /// Prints the postfix form of each expression before its result.
    #[arg(short, long)]
    postfix: bool,

    /// Fails on unbound variables instead of asking for their values.
    #[arg(long)]
    no_prompt: bool,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// An expression, or a path when `--file` is given.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(&args.log_level);

    let options = SessionOptions { presets:      args.vars.into_iter().collect::<Bindings>(),
                                   prompt:       !args.no_prompt,
                                   show_postfix: args.postfix, };
    let mut session = Session::new(options);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut answers = stdin.lock();
    let mut output = stdout.lock();

    let result = match args.contents {
        None => session.run_repl(&mut answers, &mut output),
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            session.run_batch(script.lines(), &mut answers, &mut output)
        },
        Some(expression) => session.run_batch([expression.as_str()], &mut answers, &mut output),
    };

    match result {
        Ok(Summary { failed: 0, .. }) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e, "i/o failure");
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
