use std::{
    fs,
    io::{self, IsTerminal},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};
use yardcalc::{
    Context,
    color::{ColorMode, Palette},
    repl::Repl,
    run_script,
    selftest,
};

/// yardcalc evaluates integer expressions with single-letter variables and
/// functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates a script file line by line instead of starting the REPL.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Runs the built-in self-test cases before anything else.
    #[arg(long)]
    self_test: bool,

    /// Enables debug logging. `RUST_LOG` takes precedence when set.
    #[arg(short, long)]
    debug: bool,

    /// When to color console output.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Disables colored output. Same as `--color never`.
    #[arg(long, conflicts_with = "color")]
    no_color: bool,

    /// A single expression to evaluate.
    expression: Option<String>,
}

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Builds the filter for the given debug state, honouring `RUST_LOG`.
fn filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                         EnvFilter::new(if debug { "yardcalc=debug" } else { "warn" })
                                     })
}

fn init_logging(debug: bool) -> FilterHandle {
    let (layer, handle) = reload::Layer::new(filter(debug));
    tracing_subscriber::registry().with(layer)
                                  .with(fmt::layer().with_target(true)
                                                    .with_level(true)
                                                    .with_writer(io::stderr))
                                  .init();
    handle
}

fn main() -> ExitCode {
    let args = Args::parse();
    let handle = init_logging(args.debug);
    let mut context = Context::new();
    let mode = if args.no_color { ColorMode::Never } else { args.color };
    let palette = Palette::new(mode.should_use_colors(io::stdout().is_terminal()));

    if args.self_test {
        let reports = selftest::run(&mut context);
        if let Err(e) = selftest::write_reports(&reports, &mut io::stdout(), palette) {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
        if !reports.iter().all(selftest::CaseReport::passed) {
            return ExitCode::FAILURE;
        }
        context.reset();
        if args.file.is_none() && args.expression.is_none() {
            return ExitCode::SUCCESS;
        }
    }

    if let Some(path) = &args.file {
        let Ok(source) = fs::read_to_string(path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::FAILURE;
        };
        return match run_script(&source, &mut context) {
            Ok(result) => {
                if let Some(value) = result {
                    println!("{value}");
                }
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    if let Some(expression) = &args.expression {
        return match context.evaluate(expression) {
            Ok(result) => {
                if let Some(value) = result {
                    println!("{value}");
                }
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    let mut repl = Repl::new(context, args.debug, |debug| {
                       if let Err(e) = handle.reload(filter(debug)) {
                           tracing::warn!(error = %e, "could not change the log level");
                       }
                   }).with_palette(palette);
    let stdin = io::stdin();
    if let Err(e) = repl.run(stdin.lock(), &mut io::stdout()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
