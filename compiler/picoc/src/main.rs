//! Pico CLI

use pico_diagnostic::emitter::ColorMode;
use picoc::commands::{lex_file, parse_file, run_file};
use picoc::{init_tracing, RunMode, RunOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let code = match command.as_str() {
        "run" => {
            let Some((path, options)) = parse_file_args(&args[2..]) else {
                eprintln!("Usage: pico run <file.pc> [options]");
                std::process::exit(1);
            };
            run_file(&path, &options)
        }
        "compile" | "check" => {
            let Some((path, mut options)) = parse_file_args(&args[2..]) else {
                eprintln!("Usage: pico {command} <file.pc>");
                std::process::exit(1);
            };
            options.mode = if command == "compile" {
                RunMode::Compile
            } else {
                RunMode::CheckTypes
            };
            run_file(&path, &options)
        }
        "lex" => {
            let Some((path, options)) = parse_file_args(&args[2..]) else {
                eprintln!("Usage: pico lex <file.pc>");
                std::process::exit(1);
            };
            lex_file(&path, &options)
        }
        "parse" => {
            let Some((path, options)) = parse_file_args(&args[2..]) else {
                eprintln!("Usage: pico parse <file.pc>");
                std::process::exit(1);
            };
            parse_file(&path, &options)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-v" => {
            println!("Pico {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            // If it looks like a source file, run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pc"))
            {
                match parse_file_args(&args[1..]) {
                    Some((path, options)) => run_file(&path, &options),
                    None => 1,
                }
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                1
            }
        }
    };

    std::process::exit(code);
}

/// Split `args` into the file path and run options.
///
/// Returns `None` when no path is given or an option is invalid; the
/// problem has already been printed.
fn parse_file_args(args: &[String]) -> Option<(String, RunOptions)> {
    let mut options = RunOptions::default();
    let mut color = None;
    let mut path = None;

    for arg in args {
        if arg == "--compile" || arg == "-c" {
            options.mode = RunMode::Compile;
        } else if arg == "--check-types" {
            options.mode = RunMode::CheckTypes;
        } else if let Some(when) = arg.strip_prefix("--color=") {
            match when.parse::<ColorMode>() {
                Ok(mode) => color = Some(mode),
                Err(msg) => {
                    eprintln!("error: {msg}");
                    return None;
                }
            }
        } else if let Some(depth) = arg.strip_prefix("--max-call-depth=") {
            match depth.parse::<usize>() {
                Ok(depth) => options.max_call_depth = Some(depth),
                Err(_) => {
                    eprintln!("error: invalid call depth `{depth}`");
                    return None;
                }
            }
        } else if arg.starts_with('-') {
            eprintln!("error: unknown option '{arg}'");
            return None;
        } else if path.is_none() {
            path = Some(arg.clone());
        }
    }

    // An explicit --color wins over NO_COLOR.
    options.color = color.unwrap_or_else(|| {
        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            ColorMode::Never
        } else {
            ColorMode::Auto
        }
    });

    let Some(path) = path else {
        eprintln!("error: missing file path");
        return None;
    };
    Some((path, options))
}

fn print_usage() {
    println!("Pico interpreter");
    println!();
    println!("Usage: pico <command> [options]");
    println!("       pico <file.pc> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.pc>        Run a Pico program");
    println!("  lex <file.pc>        Tokenize and report the token count");
    println!("  parse <file.pc>      Parse and list the functions");
    println!("  compile <file.pc>    Compile ahead of time (not implemented)");
    println!("  check <file.pc>      Type check (not implemented)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --compile, -c            Same as `compile`");
    println!("  --check-types            Same as `check`");
    println!("  --color=<when>           Color diagnostics: auto, always, never");
    println!("  --max-call-depth=<n>     Limit on nested calls (default 10000)");
    println!();
    println!("Environment:");
    println!("  PICO_LOG, RUST_LOG       Log filter, e.g. PICO_LOG=pico_eval=debug");
    println!("  NO_COLOR                 Disable colored diagnostics");
}
