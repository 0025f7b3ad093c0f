//! Diagnostics logging
//!
//! Log lines go to stderr. The filter comes from `CARETSH_LOG` using the
//! usual `EnvFilter` directive syntax (`debug`, `caretsh=trace`, ...).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "CARETSH_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Build the filter for a directive, falling back to `warn`.
pub fn filter_from(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let directive = std::env::var(LOG_ENV).ok();
    let filter = filter_from(directive.as_deref());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_default_filter_is_warn() {
        assert_eq!(filter_from(None).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_directive_sets_level() {
        assert_eq!(
            filter_from(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init();
        init();
    }
}
