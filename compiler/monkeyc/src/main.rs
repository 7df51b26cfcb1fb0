//! Monkey interpreter CLI.

use std::process::ExitCode;

use monkeyc::commands::{lex_file, parse_file, run_file, CliError, Status};
use monkeyc::{init_tracing, Config, Repl};

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => return report(Err(e.into())),
    };
    init_tracing(config.log_format);

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        return report(start_repl(config));
    };

    let result = match command.as_str() {
        "run" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: monkey run <file.monkey>");
                return ExitCode::FAILURE;
            };
            run_file(path, config.eval)
        }
        "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: monkey parse <file.monkey>");
                return ExitCode::FAILURE;
            };
            parse_file(path)
        }
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: monkey lex <file.monkey>");
                return ExitCode::FAILURE;
            };
            lex_file(path)
        }
        "repl" => start_repl(config),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(Status::Success)
        }
        "version" | "--version" | "-v" => {
            println!("Monkey {}", env!("CARGO_PKG_VERSION"));
            Ok(Status::Success)
        }
        _ => {
            // If it looks like a file path, try to run it
            if is_source_file(command) {
                run_file(command, config.eval)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                Ok(Status::Failure)
            }
        }
    };

    report(result)
}

fn is_source_file(path: &str) -> bool {
    std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("monkey") || ext.eq_ignore_ascii_case("mk"))
}

fn start_repl(config: Config) -> Result<Status, CliError> {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "there".to_string());
    println!("Hello {user}, The Monkey programming language is here! Type a command...");

    Repl::new(config.eval).run(std::io::stdin().lock(), std::io::stdout().lock())?;
    println!();
    Ok(Status::Success)
}

fn report(result: Result<Status, CliError>) -> ExitCode {
    match result {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Monkey interpreter");
    println!();
    println!("Usage: monkey [command] [file]");
    println!();
    println!("Commands:");
    println!("  (none)               Start the interactive REPL");
    println!("  repl                 Start the interactive REPL");
    println!("  run <file.monkey>    Evaluate a Monkey program");
    println!("  parse <file.monkey>  Print the parsed program, one statement per line");
    println!("  lex <file.monkey>    Print the token stream");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Environment:");
    println!("  MONKEY_MAX_CALL_DEPTH  Function call depth limit (0 = unlimited, default 10000)");
    println!("  MONKEY_LOG_FORMAT      Log layout: tree (default) or flat");
    println!("  RUST_LOG               Log filter, e.g. monkey_eval=debug");
}
