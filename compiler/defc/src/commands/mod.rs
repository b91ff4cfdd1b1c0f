//! Command handlers for the defc CLI.

mod check;
mod dump;

pub use check::check_paths;
pub use dump::dump_file;

use defc::CompilerConfig;

/// Split the arguments after the command into configuration and paths.
///
/// Configuration flags may appear anywhere; any other `-` argument is an
/// error naming the option.
pub fn parse_arguments(args: &[String]) -> Result<(CompilerConfig, Vec<&str>), String> {
    let mut config = CompilerConfig::default();
    let mut paths = Vec::new();
    for arg in args {
        if config.apply_flag(arg) {
            continue;
        }
        if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        }
        paths.push(arg.as_str());
    }
    Ok((config, paths))
}

#[cfg(test)]
mod tests;
