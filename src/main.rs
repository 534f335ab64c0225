use std::{
    fs,
    io::{self, BufRead, Write},
    sync::Once,
};

use clap::Parser;
use hulk::{
    Context, Limits,
    config::{DEFAULT_MAX_CALL_DEPTH, DEFAULT_MAX_PARSE_DEPTH, DEFAULT_MAX_RANGE_LEN},
};

static TRACING_INIT: Once = Once::new();

/// hulk is an interpreter for the HULK expression language. Without a script
/// it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells hulk to read `contents` as a file path instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Suppresses the values of statements; only diagnostics are shown.
    #[arg(short, long)]
    quiet: bool,

    /// Maximum nesting of function calls.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// Maximum nesting of expressions while parsing.
    #[arg(long, default_value_t = DEFAULT_MAX_PARSE_DEPTH)]
    max_parse_depth: usize,

    /// Maximum number of elements a single `range` may produce.
    #[arg(long, default_value_t = DEFAULT_MAX_RANGE_LEN)]
    max_range_len: usize,

    contents: Option<String>,
}

/// Initializes tracing for debug output.
///
/// Enable with `RUST_LOG=hulk=debug` or `RUST_LOG=hulk=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr))
                                          .with(EnvFilter::from_default_env())
                                          .init();
        }
    });
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let limits = Limits::default().with_max_call_depth(args.max_call_depth)
                                  .with_max_parse_depth(args.max_parse_depth)
                                  .with_max_range_len(args.max_range_len);
    let mut context = Context::with_limits(limits);

    let Some(contents) = args.contents else {
        repl(&mut context, args.quiet);
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
                                         eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                                         std::process::exit(1);
                                     })
    } else {
        contents
    };

    let mut failed = false;
    for line in script.lines() {
        failed |= !run_line(line, &mut context, args.quiet);
    }
    if failed {
        std::process::exit(1);
    }
}

/// Reads lines from standard input until `#exit` or end of input.
fn repl(context: &mut Context, quiet: bool) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }
        let Some(Ok(line)) = lines.next() else {
            break;
        };

        match line.trim() {
            "#exit" => break,
            "#clear" => print!("\x1B[2J\x1B[1;1H"),
            _ => {
                run_line(&line, context, quiet);
            },
        }
    }
}

/// Runs one line, printing every value it produces and the first diagnostic
/// of a failing statement.
///
/// Returns `false` if a statement failed. Statements after a failing one are
/// skipped.
fn run_line(line: &str, context: &mut Context, quiet: bool) -> bool {
    let output = hulk::run_line(line, context);
    if !quiet {
        for value in &output.values {
            println!("{value}");
        }
    }
    match output.error {
        Some(diagnostic) => {
            eprintln!("{diagnostic}");
            false
        },
        None => true,
    }
}
