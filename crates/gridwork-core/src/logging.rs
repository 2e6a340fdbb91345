//! Logging setup built on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,gridwork_dnd=debug";

/// Install a global fmt subscriber.
///
/// Honours `RUST_LOG` when present, otherwise falls back to [`DEFAULT_FILTER`].
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Install a global fmt subscriber with an explicit filter directive.
///
/// Returns `false` if a global subscriber was already installed, which makes
/// it safe to call from several tests in the same binary.
pub fn init_with_filter(directives: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directives))
        .with_test_writer()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
    }

    #[test]
    fn test_init_with_filter_only_installs_once() {
        // The first call may lose to another test; the second always fails.
        init_with_filter("trace");
        assert!(!init_with_filter("debug"));
    }
}
