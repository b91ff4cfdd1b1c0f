//! Compiler configuration.
//!
//! One `CompilerConfig` is built per run, either by hand or from CLI flags via
//! [`CompilerConfig::apply_flag`], and handed to [`crate::Compiler::new`].

use std::path::PathBuf;

/// What to do with fields declared as `name(0)`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ZeroWidthPolicy {
    /// Keep them as zero-width fields sharing the next field's offset.
    #[default]
    Allow,
    /// Fail the load with a zero-width line error.
    Reject,
}

/// Settings for one compiler session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompilerConfig {
    /// Directory logical definition paths (and imports) are relative to.
    pub base_dir: PathBuf,
    /// Extension of generated artifacts, without the dot.
    pub header_extension: String,
    pub zero_width: ZeroWidthPolicy,
    /// Reuse one parsed definition per path for the whole session. When
    /// off, every import is parsed afresh.
    pub memoize_imports: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig {
            base_dir: PathBuf::from("."),
            header_extension: "h".to_string(),
            zero_width: ZeroWidthPolicy::Allow,
            memoize_imports: true,
        }
    }
}

impl CompilerConfig {
    /// Apply one command-line flag. Returns `false` if `arg` is not a
    /// configuration flag.
    pub fn apply_flag(&mut self, arg: &str) -> bool {
        if let Some(dir) = arg.strip_prefix("--base=") {
            self.base_dir = PathBuf::from(dir);
        } else if let Some(ext) = arg.strip_prefix("--header-ext=") {
            self.header_extension = ext.trim_start_matches('.').to_string();
        } else if arg == "--reject-zero-width" {
            self.zero_width = ZeroWidthPolicy::Reject;
        } else if arg == "--no-import-cache" {
            self.memoize_imports = false;
        } else {
            return false;
        }
        true
    }
}
