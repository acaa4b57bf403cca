//! Opt-in diagnostics for scripts that load the library as a Lua module

use std::sync::Once;

use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, Layer, prelude::*, registry::LookupSpan};

/// Environment variable holding a log filter, using env_logger-like syntax
pub const LOG_ENV: &str = "LUAMAGICK_LOG";

fn fmt_layer<S: Subscriber + for<'a> LookupSpan<'a>>() -> impl Layer<S> {
    tracing_subscriber::fmt::layer().with_writer(std::io::stderr)
}

/// Parse a filter, warning through a temporary stderr subscriber if it is
/// invalid
fn parse_filter(raw: &str) -> Option<EnvFilter> {
    EnvFilter::try_new(raw)
        .inspect_err(|e| {
            let _guard =
                tracing::subscriber::set_default(tracing_subscriber::registry().with(fmt_layer()));
            tracing::warn!("Invalid {LOG_ENV} filter {raw:?}: {e}");
        })
        .ok()
}

/// Install a stderr subscriber filtered by [`LOG_ENV`], unless the variable
/// is unset or the host process already installed a global subscriber
pub(crate) fn init() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let Some(filter) = std::env::var(LOG_ENV).ok().as_deref().and_then(parse_filter) else {
            return;
        };

        let res = tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer())
            .try_init();

        if res.is_ok() {
            tracing::debug!("Logging enabled from {LOG_ENV}");
        }
    });
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert!(parse_filter("luamagick=trace,warn").is_some());
        assert!(parse_filter("luamagick=notalevel").is_none());
    }
}
