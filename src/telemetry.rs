//! Server log output. `RUST_LOG` overrides the default filter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LEVEL: &str = "info";

fn default_directive() -> String {
    format!("{}={DEFAULT_LEVEL}", env!("CARGO_CRATE_NAME"))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive()))
}

/// Installs the global subscriber. Records from the `log` facade are
/// forwarded to it as well.
pub fn init() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    };

    use tracing_subscriber::{filter::Directive, layer::Context, Layer};

    use super::*;

    struct SeenLayer(Arc<AtomicBool>);

    impl<S: tracing::Subscriber> Layer<S> for SeenLayer {
        fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(), "portfolio_site=info");
        assert!(default_directive().parse::<Directive>().is_ok());
    }

    #[test]
    fn test_log_records_reach_subscriber() {
        tracing_log::LogTracer::init().ok();
        let seen = Arc::new(AtomicBool::new(false));
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new(default_directive()))
            .with(SeenLayer(seen.clone()));

        tracing::subscriber::with_default(subscriber, || {
            log::info!(target: "portfolio_site::catalog", "loaded");
        });
        assert!(seen.load(Ordering::SeqCst));
    }
}
