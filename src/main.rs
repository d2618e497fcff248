use std::fs;

use aurora::{
    config::{Config, DEFAULT_MAX_CALL_DEPTH, ScopeMode},
    execute,
};
use clap::Parser;
use log::LevelFilter;

/// aurora is a small scripting language with functions, classes and lists.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells aurora to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode prints the final value of the script, unless it is null.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Resolve free names in a function body at the call site instead of
    /// where the function was defined.
    #[arg(short, long)]
    dynamic_scope: bool,

    /// Maximum depth of nested function calls.
    #[arg(short, long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_depth: usize,

    /// Log phase summaries and definitions to stderr. `RUST_LOG` overrides
    /// this.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new().filter_level(if args.verbose {
                                                LevelFilter::Debug
                                            } else {
                                                LevelFilter::Warn
                                            })
                              .parse_default_env()
                              .init();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let scope_mode = if args.dynamic_scope { ScopeMode::Dynamic } else { ScopeMode::Lexical };
    let config = Config::default().with_scope_mode(scope_mode)
                                  .with_max_call_depth(args.max_depth);

    match execute(&script, config, &mut |line: &str| println!("{line}")) {
        Ok(value) => {
            if args.pipe_mode && !value.is_absent() {
                println!("{value}");
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        },
    }
}
