use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::formatter;

static SUBSCRIBER_INIT: std::sync::Once = std::sync::Once::new();

/// Default filter directives when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("warn,{name}={level}", name = env!("CARGO_CRATE_NAME"))
}

/// Configure and initialize logging for the application
///
/// Logs go to stderr so they never interleave with the map on stdout.
/// Calling this more than once has no effect.
pub fn setup_logging(verbose: bool) {
    SUBSCRIBER_INIT.call_once(|| {
        // Allow RUST_LOG to override levels
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

        let subscriber = FmtSubscriber::builder()
            .with_writer(std::io::stderr)
            .with_ansi(cfg!(debug_assertions))
            .event_format(formatter::TurnFormatter)
            .with_env_filter(filter)
            .finish()
            .with(ErrorLayer::default());

        if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Could not install log subscriber: {error}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "warn,dungeon=info");
        assert_eq!(default_filter(true), "warn,dungeon=debug");
    }
}
