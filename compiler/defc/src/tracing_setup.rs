//! Logging initialization for the `defc` binary.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

/// Directives used when `RUST_LOG` is unset or unparsable: definition
/// warnings (duplicate or non-identifier names) from the defc crates only.
pub const DEFAULT_DIRECTIVES: &str = "defc=warn,defc_parse=warn";

/// Initialize tracing for the CLI.
///
/// Safe to call multiple times. Override with `RUST_LOG=defc=debug` or
/// `RUST_LOG=defc=trace,defc_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*};

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(env_filter())
            .init();
    });
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_parse() {
        let filter = EnvFilter::try_new(DEFAULT_DIRECTIVES);
        assert!(filter.is_ok());
    }

    #[test]
    fn default_filter_is_scoped_to_defc() {
        let filter = EnvFilter::new(DEFAULT_DIRECTIVES).to_string();
        assert!(filter.contains("defc=warn"));
        assert!(filter.contains("defc_parse=warn"));
    }
}
