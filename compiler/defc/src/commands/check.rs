//! The `check` command: load every definition under the given paths.

use std::path::{Path, PathBuf};

use defc::discovery::discover_definitions;
use defc::{Compiler, CompilerConfig, Definition};

/// Load each definition found under `paths` (relative to the base
/// directory) and print one summary line per file.
///
/// Keeps going after a failed definition so the user sees every broken file
/// in one run; exits with status 1 if any failed.
pub fn check_paths(paths: &[&str], config: CompilerConfig) {
    let mut compiler = Compiler::new(config);
    let files = collect_files(&compiler.config().base_dir, paths);

    let mut failures = 0usize;
    for file in &files {
        match compiler.load(file) {
            Ok(def) => println!("OK: {} ({})", file.display(), summary(&def)),
            Err(err) => {
                eprintln!("error: {err}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        eprintln!("{failures} of {} definitions failed", files.len());
        std::process::exit(1);
    }
}

/// Definition files under each of `paths`, as the compiler should name them.
fn collect_files(base: &Path, paths: &[&str]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        let found = discover_definitions(&base.join(path));
        if found.is_empty() {
            eprintln!("warning: no definition files found at {path}");
        }
        files.extend(found.into_iter().map(|file| logical_path(base, file)));
    }
    files
}

/// Path relative to `base`, which is how definitions refer to each other.
fn logical_path(base: &Path, file: PathBuf) -> PathBuf {
    match file.strip_prefix(base) {
        Ok(rel) => rel.to_path_buf(),
        Err(_) => file,
    }
}

fn summary(def: &Definition) -> String {
    let imports = def.import_paths().len();
    match def {
        Definition::Bitfield(bits) => format!(
            "bitfield {}, {} fields, {} bits in {}, {imports} imports",
            bits.name(),
            bits.elements.len(),
            bits.total_bits(),
            bits.ty,
        ),
        Definition::Enum(en) => format!(
            "enum {}, {} values + sentinel in {}, {imports} imports",
            en.name(),
            en.user_elements().len(),
            en.ty,
        ),
    }
}
