//! Feature-gated tracing macros.
//!
//! With the `tracing` feature these forward to the `tracing` crate. Without it
//! spans become [`NoopSpan`] and events evaluate their fields and drop them.
//!
//! Events default to info level; prefix the name with `debug:` for events on
//! the per-anchor hot path:
//!
//! ```ignore
//! trace_event!("match_found", pixel_index = idx);
//! trace_event!(debug: "false_positive_anchor", pixel_index = idx);
//! ```

/// Opens an info-level span around a locator run.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Emits an event with key/value fields at info (default) or debug level.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    (debug: $name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::debug!(name: $name, $($key = $value),+)
    };
    (debug: $name:expr) => {
        tracing::event!(name: $name, tracing::Level::DEBUG, {})
    };
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
    ($name:expr) => {
        tracing::event!(name: $name, tracing::Level::INFO, {})
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    (debug: $name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
    (debug: $name:expr) => {};
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
    ($name:expr) => {};
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Guard returned by `trace_span!` when tracing is compiled out.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
