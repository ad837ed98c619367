use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "WALLSCAN_LOG";

static INIT: Once = Once::new();

/// Install the stderr subscriber.
///
/// `WALLSCAN_LOG` (e.g. `WALLSCAN_LOG=wallscan::loader=debug`) wins over
/// `fallback_filter`. Only the first call has any effect.
pub fn init_tracing(fallback_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(fallback_filter))
            .unwrap_or_else(|_| EnvFilter::new("wallscan=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
