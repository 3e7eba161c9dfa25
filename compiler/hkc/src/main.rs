//! Hiko Compiler CLI

mod commands;
mod tracing_setup;

use commands::{lex_file, parse_lex_args, report_error};

fn main() {
    tracing_setup::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let lex_args = match parse_lex_args(&args[2..]) {
                Ok(lex_args) => lex_args,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    eprintln!("Usage: hkc lex <file.hk> [--chunk-size=<bytes>]");
                    std::process::exit(1);
                }
            };

            let stdout = std::io::stdout();
            if let Err(err) = lex_file(&lex_args, &mut stdout.lock()) {
                report_error(&err);
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Hiko Compiler {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Hiko Compiler");
    println!();
    println!("Usage: hkc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.hk>        Print the token stream of a file");
    println!("  help                 Show this message");
    println!("  version              Show version information");
    println!();
    println!("Options for lex:");
    println!("  --chunk-size=<bytes> Bytes requested per read (default: 65536)");
    println!();
    println!("Set RUST_LOG or HK_LOG (e.g. HK_LOG=hk_io=debug) to enable tracing.");
}
