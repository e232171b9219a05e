//! `weft`: token dumps and resume-state decoding for the weft tokenizer.

use weftc::commands::{lex_file, parse_lex_options, state_command};

fn main() {
    weftc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: weft lex <file> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --no-links          Do not split URLs out of comments");
                eprintln!("  --links=comments    Split URLs out of comments (default)");
                eprintln!("  --links=strings     Split URLs out of comments and strings");
                eprintln!("  --state=<n>         Resume state of the first line (default: 0)");
                std::process::exit(1);
            }
            let options = match parse_lex_options(&args[3..]) {
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    std::process::exit(1);
                }
            };
            lex_file(&args[2], &options);
        }
        "state" => {
            if args.len() < 3 {
                eprintln!("Usage: weft state <n>");
                eprintln!("Example: weft state 0x0288");
                std::process::exit(1);
            }
            state_command(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("weft {}", env!("CARGO_PKG_VERSION"));
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
    println!("weft - line-resumable markup tokenizer");
    println!();
    println!("Usage: weft <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>     Tokenize a file line by line and print every token");
    println!("  state <n>      Decode a resume-state integer (decimal or 0x hex)");
    println!("  help           Show this help message");
    println!("  version        Show version information");
    println!();
    println!("Lex options:");
    println!("  --no-links          Do not split URLs out of comments");
    println!("  --links=comments    Split URLs out of comments (default)");
    println!("  --links=strings     Split URLs out of comments and strings");
    println!("  --state=<n>         Resume state of the first line (default: 0)");
    println!();
    println!("Set RUST_LOG=weft_lexer=trace to log grammar hand-offs.");
}
