//! The `dump` command: print the template model of one definition.

use defc::emit::to_json;
use defc::{Compiler, CompilerConfig};

pub fn dump_file(path: &str, config: CompilerConfig) {
    let mut compiler = Compiler::new(config);
    let def = match compiler.load(path) {
        Ok(def) => def,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    match to_json(&def) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("error: cannot serialize {path}: {err}");
            std::process::exit(1);
        }
    }
}
