pub mod build_info;

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "rentbook=info";

/// Initializes the global tracing subscriber. Logs go to stderr so report
/// output on stdout stays machine readable.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let spec = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let _ = fmt()
            .with_env_filter(env_filter(spec.as_deref()))
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// `RUST_LOG` replaces the default directive outright; blank or unparsable
/// values fall back to it.
fn env_filter(spec: Option<&str>) -> EnvFilter {
    match spec.map(str::trim).filter(|spec| !spec.is_empty()) {
        Some(spec) => {
            EnvFilter::try_new(spec).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
        }
        None => EnvFilter::new(DEFAULT_DIRECTIVE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_overrides_default_level() {
        assert_eq!(env_filter(Some("rentbook=warn")).to_string(), "rentbook=warn");
        assert_eq!(env_filter(Some("rentbook=debug")).to_string(), "rentbook=debug");
    }

    #[test]
    fn unset_blank_or_invalid_rust_log_uses_default() {
        assert_eq!(env_filter(None).to_string(), DEFAULT_DIRECTIVE);
        assert_eq!(env_filter(Some("  ")).to_string(), DEFAULT_DIRECTIVE);
        assert_eq!(env_filter(Some("rentbook=loud")).to_string(), DEFAULT_DIRECTIVE);
    }
}
