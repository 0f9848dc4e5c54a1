use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured JSON tracing to stdout. Call once at startup with
/// the service name; the name is emitted so aggregated logs stay attributable.
///
/// Filtering honors `RUST_LOG` and falls back to `info`.
/// Safe to call multiple times — subsequent calls are silently ignored.
pub fn init_tracing(service: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init();
    tracing::info!(service, "tracing initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_twice_does_not_panic() {
        init_tracing("test");
        init_tracing("test");
    }
}
