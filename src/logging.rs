//! Logging setup.
//!
//! Native builds log through a `tracing-subscriber` fmt layer filtered by
//! `RUST_LOG`. Browser builds route `tracing` to the developer console and
//! install a panic hook so panics show up there too.

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_FILTER: &str = "marquee_select=info";

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let _ = tracing_wasm::try_set_as_global_default();
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    }
}
