//! Tracing support for stow containers
//!
//! Wraps the `tracing` crate and provides the spans the container modules
//! open. Only compiled with the `tracing` feature; without it the crate emits
//! nothing.

pub use ::tracing::{debug, trace, warn};
pub use ::tracing::{debug_span, trace_span};
pub use ::tracing::{Level, Span};

/// Trace spans for the sort primitives
#[derive(Debug, Clone)]
pub struct SortTrace;

impl SortTrace {
    /// Create a span for a heap sort over `len` slots
    #[inline]
    pub fn heap_sort(form: &'static str, len: usize) -> Span {
        trace_span!("heap_sort", form = form, len = len)
    }
}

/// Trace spans for the policy engine
#[derive(Debug, Clone)]
pub struct PolicyTrace;

impl PolicyTrace {
    /// Create a span for one `sorted_insert` call
    #[inline]
    pub fn sorted_insert(policy: &'static str, count: usize, capacity: usize) -> Span {
        trace_span!(
            "sorted_insert",
            policy = policy,
            count = count,
            capacity = capacity
        )
    }
}
