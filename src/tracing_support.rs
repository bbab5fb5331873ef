//! Tracing support for algorithm runs.
//!
//! With the `tracing` feature enabled, algorithms open spans and emit debug
//! events through the `tracing` crate, and [`init_tracing`] installs a
//! subscriber that accumulates wall time per span name.  Without the feature
//! every entry point here is a no-op.

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        Layer, Registry, layer::Context, layer::SubscriberExt, registry::LookupSpan,
        util::SubscriberInitExt,
    };

    thread_local! {
        static SPAN_TIMINGS: RefCell<BTreeMap<&'static str, SpanTiming>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    /// Total wall time and number of closed spans for one span name.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SpanTiming {
        pub total: Duration,
        pub count: usize,
    }

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(&id) {
                let name = span.metadata().name();
                if let Some(start) = span.extensions().get::<Instant>() {
                    let elapsed = start.elapsed();
                    SPAN_TIMINGS.with(|timings| {
                        let mut timings = timings.borrow_mut();
                        let entry = timings.entry(name).or_default();
                        entry.total += elapsed;
                        entry.count += 1;
                    });
                }
            }
        }
    }

    pub(super) fn timing_subscriber() -> impl tracing::Subscriber + Send + Sync {
        Registry::default().with(TimingLayer)
    }

    /// Installs the timing subscriber as the global default.  Later calls,
    /// and calls after another subscriber was installed, do nothing.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = timing_subscriber().try_init();
        });
    }

    /// Returns the accumulated timings of this thread, slowest first.
    pub fn algorithm_timings() -> Vec<(&'static str, SpanTiming)> {
        SPAN_TIMINGS.with(|timings| {
            let mut entries: Vec<_> = timings
                .borrow()
                .iter()
                .map(|(name, timing)| (*name, *timing))
                .collect();
            entries.sort_by(|a, b| b.1.total.cmp(&a.1.total));
            entries
        })
    }

    pub fn reset_algorithm_timings() {
        init_tracing();
        SPAN_TIMINGS.with(|timings| timings.borrow_mut().clear());
    }

    pub(crate) use tracing::{debug as debug_event, info_span};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use std::time::Duration;

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SpanTiming {
        pub total: Duration,
        pub count: usize,
    }

    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    pub fn algorithm_timings() -> Vec<(&'static str, SpanTiming)> {
        Vec::new()
    }

    pub fn reset_algorithm_timings() {
        // No-op when tracing is disabled
    }

    macro_rules! debug_event {
        ($($args:tt)*) => {{}};
    }

    // Provide a no-op macro replacement for info_span
    macro_rules! info_span {
        ($name:expr) => {{ $crate::tracing_support::NoOpSpan }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    pub(crate) use {debug_event, info_span};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

// Re-export the appropriate implementation
#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
