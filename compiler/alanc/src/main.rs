//! Alan Compiler CLI

use alanc::commands::{explain_error, lex_file, LexOptions};

fn main() {
    alanc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => run_lex(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Alan Compiler {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: alanc explain <CODE>");
                eprintln!("Example: alanc explain E0001");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        _ => {
            // Anything that is not a flag is taken as a file to lex
            if command.starts_with('-') {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
            run_lex(&args[1..]);
        }
    }
}

fn run_lex(args: &[String]) {
    match LexOptions::parse(args) {
        Ok((options, path)) => lex_file(path, options),
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Usage: alanc lex <file> [--quiet|-q] [--color=auto|always|never]");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Alan Compiler");
    println!();
    println!("Usage: alanc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize a file and report each program");
    println!("  <file>               Shorthand for `lex <file>`");
    println!("  explain <code>       Explain a diagnostic code (e.g., E0001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --quiet, -q          Only show warnings and errors");
    println!("  --color=<mode>       Color output: auto (default), always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=<filter>    Enable internal tracing (e.g., alan_lexer=trace)");
    println!();
    println!("Examples:");
    println!("  alanc lex tests.alan");
    println!("  alanc tests.alan --quiet");
    println!("  alanc explain W0002");
}
