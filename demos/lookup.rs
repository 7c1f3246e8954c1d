use clap::{Parser, ValueEnum};
use dotpath::{Resolver, TerminalPolicy};
use std::fs;
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    String,
    Number,
    Bool,
}

/// Print the scalar at a dotted path in a JSON file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path expression, e.g. `foo.*.bar[1]`
    path: String,

    /// JSON document to read
    file: String,

    /// Kind of value expected at the path
    #[arg(long, value_enum, default_value_t = Kind::String)]
    kind: Kind,

    /// Report paths ending on objects or arrays as errors
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn run(args: &Args) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let document = fs::read(&args.file)?;
    let policy = if args.strict {
        TerminalPolicy::Strict
    } else {
        TerminalPolicy::Permissive
    };
    let resolver = Resolver::builder().with_terminal_policy(policy).build();

    let value = match args.kind {
        Kind::String => resolver.get_string(&args.path, &document)?,
        Kind::Number => resolver
            .get_number(&args.path, &document)?
            .map(|n| n.to_string()),
        Kind::Bool => resolver
            .get_bool(&args.path, &document)?
            .map(|b| b.to_string()),
    };
    Ok(value)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    log::debug!("Looking up '{}' in {}", args.path, args.file);

    match run(&args) {
        Ok(Some(value)) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("<none>");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
