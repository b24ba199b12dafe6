//! Tracing support for container mutations.
//!
//! This module forwards to `tracing` when the `tracing` feature is enabled,
//! and provides no-op implementations when it's disabled.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    /// Installs a fmt subscriber that writes through the test harness. Only the
    /// first call in a process has any effect, and an already installed
    /// global subscriber is left alone.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::TRACE)
                .with_test_writer()
                .try_init();
        });
    }

    macro_rules! trace_event {
        ($($args:tt)*) => {
            ::tracing::trace!(target: "symmetric", $($args)*)
        };
    }

    pub(crate) use trace_event;
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    macro_rules! trace_event {
        ($($args:tt)*) => {{}};
    }

    pub(crate) use trace_event;
}

#[cfg(feature = "tracing")]
pub use enabled::init_tracing;
#[cfg(feature = "tracing")]
pub(crate) use enabled::trace_event;

#[cfg(not(feature = "tracing"))]
pub use disabled::init_tracing;
#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::trace_event;
