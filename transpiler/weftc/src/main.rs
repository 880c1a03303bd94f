//! Weft transpiler CLI.

use weftc::commands::{build_file, check_file, emit_file, BuildOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "build" => {
            if args.len() < 3 {
                eprintln!("Usage: weft build <file.weft> [-o <path>]");
                std::process::exit(1);
            }

            // Parse options, handling -o specially (needs lookahead)
            let mut options = BuildOptions::default();
            let mut i = 3;
            while i < args.len() {
                if args[i] == "-o" && i + 1 < args.len() {
                    options.output = Some(std::path::PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    eprintln!("error: unknown build option '{}'", args[i]);
                    std::process::exit(1);
                }
            }

            build_file(&args[2], &options);
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: weft check <file.weft>");
                std::process::exit(1);
            }
            check_file(&args[2]);
        }
        "emit" => {
            if args.len() < 3 {
                eprintln!("Usage: weft emit <file.weft>");
                std::process::exit(1);
            }
            emit_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Weft {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a source file, build it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("weft"))
            {
                build_file(command, &BuildOptions::default());
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("WEFT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!("Weft transpiler");
    println!();
    println!("Usage: weft <command> [options]");
    println!();
    println!("Commands:");
    println!("  build <file.weft>    Transpile to JavaScript next to the input");
    println!("  check <file.weft>    Transpile and report errors, write nothing");
    println!("  emit <file.weft>     Transpile to stdout");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Build options:");
    println!("  -o <path>            Output file path (default: input with .js)");
    println!();
    println!("Environment:");
    println!("  WEFT_LOG             Tracing filter (e.g. debug, weft_transpile=trace)");
    println!();
    println!("Examples:");
    println!("  weft build page.weft");
    println!("  weft build page.weft -o dist/page.js");
    println!("  weft check page.weft");
    println!("  weft emit page.weft > page.js");
}
