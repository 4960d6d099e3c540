//! Tracing subscriber setup for the binary

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive string
pub const LOG_ENV: &str = "FINANZAS_LOG";

const DEFAULT_DIRECTIVE: &str = "finanzas=warn";
const VERBOSE_DIRECTIVE: &str = "finanzas=debug";

static TRACING_INIT: Once = Once::new();

/// Install the global fmt subscriber, writing to stderr
///
/// `FINANZAS_LOG` wins when set; otherwise only warnings are shown, or debug
/// events with `verbose`. Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref(), verbose);

        // Another subscriber may already be installed (tests)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

fn build_filter(env_value: Option<&str>, verbose: bool) -> EnvFilter {
    let base = match env_value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
        None => EnvFilter::new(DEFAULT_DIRECTIVE),
    };

    if verbose {
        match VERBOSE_DIRECTIVE.parse() {
            Ok(directive) => base.add_directive(directive),
            Err(_) => base,
        }
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(build_filter(None, false).to_string(), "finanzas=warn");
    }

    #[test]
    fn test_verbose_raises_level() {
        let filter = build_filter(None, true).to_string();
        assert!(filter.contains("finanzas=debug"));
    }

    #[test]
    fn test_env_value_used_and_invalid_falls_back() {
        assert_eq!(build_filter(Some("finanzas=trace"), false).to_string(), "finanzas=trace");
        assert_eq!(build_filter(Some("   "), false).to_string(), "finanzas=warn");
        assert_eq!(build_filter(Some("finanzas=loud"), false).to_string(), "finanzas=warn");
    }

    #[test]
    fn test_init_is_idempotent() {
        init_tracing(false);
        init_tracing(true);
    }
}
