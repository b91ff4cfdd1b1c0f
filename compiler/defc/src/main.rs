//! defc CLI
//!
//! Loads bitfield and enum definitions and prints their template model.

mod commands;

fn main() {
    defc::tracing_setup::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let (config, paths) = match commands::parse_arguments(&args[2..]) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };

    match command.as_str() {
        "check" => {
            if paths.is_empty() {
                eprintln!("Usage: defc check <path>... [options]");
                std::process::exit(1);
            }
            commands::check_paths(&paths, config);
        }
        "dump" => {
            let [path] = paths.as_slice() else {
                eprintln!("Usage: defc dump <file> [options]");
                std::process::exit(1);
            };
            commands::dump_file(path, config);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("defc {}", env!("CARGO_PKG_VERSION"));
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
    println!("defc - bitfield and enum definition compiler");
    println!();
    println!("Usage: defc <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <path>...      Load definitions (files or directories)");
    println!("  dump <file>          Print the JSON template model of a definition");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --base=<dir>         Directory definition and import paths are relative to");
    println!("  --header-ext=<ext>   Extension of generated headers (default: h)");
    println!("  --reject-zero-width  Fail on fields declared with zero bits");
    println!("  --no-import-cache    Parse every import afresh");
    println!();
    println!("Examples:");
    println!("  defc check bit enum");
    println!("  defc dump bit/net/Header.btx");
    println!("  defc check --base=defs .          # everything under ./defs");
    println!();
    println!("Set RUST_LOG=defc=debug for load tracing.");
}
