// ============================================================================
// Logging
// Optional tracing subscriber setup (feature = "logging")
// ============================================================================

use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber filtered by `RUST_LOG`.
///
/// `level` is the default directive used when `RUST_LOG` is unset or
/// contains no valid directives.
///
/// # Errors
/// Fails if a global subscriber was already installed.
pub fn init_logging(level: Level) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(false)
        .try_init()
}

fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_applies() {
        let filter = env_filter(Level::WARN);
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(filter.to_string(), "warn");
        }
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init_logging(Level::DEBUG);
        assert!(init_logging(Level::DEBUG).is_err());
    }
}
