// src/log.rs
//
// Logging front end. The `logf!` / `logd!` / `loge!` macros are what the rest of
// the crate calls; they forward to `tracing`, so embedding applications can
// route events wherever they like. Binaries call `init` once at startup.

use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber.
/// `RUST_LOG` wins over `default_level` when set.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (tests, embedding) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::__private::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::__private::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::__private::error!($($arg)*)
    };
}

#[doc(hidden)]
pub mod __private {
    pub use tracing::{debug, error, info};
}
