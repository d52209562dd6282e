use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU32, Ordering};

/// Process-wide tag counter, starting at 1 so that a zeroed tag is never handed out first.
static GLOBAL_TAG_COUNTER: Lazy<AtomicU32> = Lazy::new(|| AtomicU32::new(1));

/// Returns the next correlation tag for an outbound RPC request.
///
/// Tags are only required to be unique among requests in flight on one
/// connection, so the counter simply wraps on overflow.
#[inline]
pub fn next_tag() -> u32 {
    GLOBAL_TAG_COUNTER.fetch_add(1, Ordering::Relaxed)
}
