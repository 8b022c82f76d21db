//! Logger bootstrap.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global `env_logger` once; later calls are ignored.
///
/// `filter` overrides the environment and follows the `env_logger` filter
/// syntax (e.g. `"info"`, `"spotglass_scene=debug"`). With `None` the
/// `RUST_LOG` variable applies, falling back to info level.
///
/// Intended usage is early in `main`.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
