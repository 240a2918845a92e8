use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use env_logger::Env;
use mathexpr::{Config, Engine, Error, NumberMode, config::EPSILON};

/// mathexpr evaluates mathematical expressions with numbers, complex numbers,
/// units and arrays.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells mathexpr to read the expressions from a file.
    #[arg(short, long)]
    file: bool,

    /// Evaluates number literals as exact big numbers.
    #[arg(short, long, env = "MATHEXPR_BIGNUMBER")]
    bignumber: bool,

    /// Relative tolerance of equality comparisons.
    #[arg(short, long, env = "MATHEXPR_EPSILON", default_value_t = EPSILON)]
    epsilon: f64,

    /// Logs every parse, compile and evaluation step.
    #[arg(short, long)]
    verbose: bool,

    /// The expressions, or a file name with `--file`. Without it, standard
    /// input is evaluated line by line.
    contents: Option<String>,
}

fn run(engine: &mut Engine, source: &str) -> Result<(), Error> {
    if let Some(value) = engine.eval(source)? {
        println!("{value}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(filter)).init();

    let number = if args.bignumber { NumberMode::BigNumber } else { NumberMode::Number };
    let mut engine = Engine::with_config(Config { number, ..Config::default() }.with_epsilon(args.epsilon));

    let Some(contents) = args.contents else {
        let mut failed = false;
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if let Err(e) = run(&mut engine, &line) {
                eprintln!("{e}");
                failed = true;
            }
        }
        return if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS };
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    match run(&mut engine, &script) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
