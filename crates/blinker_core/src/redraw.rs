//! Redraw signalling
//!
//! Blinker components never draw on their own. Whenever something visible
//! changes they raise a redraw request, and the host honours it by
//! scheduling a render pass. A host can either poll the flag from its event
//! loop with [`RedrawSignal::take_needs_redraw`] or install a wake callback
//! that fires on every request.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Callback used to wake the host when a redraw is requested
///
/// The callback should wake up the event loop (e.g., via an event loop proxy).
pub type RedrawCallback = Arc<dyn Fn() + Send + Sync>;

/// Cloneable handle to a shared redraw flag
///
/// Every clone observes and raises the same flag, so a view and the
/// controllers it owns can share a single signal.
#[derive(Clone, Default)]
pub struct RedrawSignal {
    needs_redraw: Arc<AtomicBool>,
    requests: Arc<AtomicU64>,
    callback: Option<RedrawCallback>,
}

impl RedrawSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a signal that also invokes `callback` on every request
    pub fn with_callback<F>(callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            callback: Some(Arc::new(callback)),
            ..Self::default()
        }
    }

    /// Install or replace the wake callback
    ///
    /// Only this handle (and clones made after the call) will invoke it.
    pub fn set_callback<F>(&mut self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.callback = Some(Arc::new(callback));
    }

    /// Request a redraw
    ///
    /// Sets the needs_redraw flag and wakes the host if a callback is set.
    pub fn request(&self) {
        self.needs_redraw.store(true, Ordering::Release);
        self.requests.fetch_add(1, Ordering::Relaxed);
        if let Some(callback) = &self.callback {
            callback();
        }
    }

    /// Check and clear the needs_redraw flag
    ///
    /// Returns the previous value and clears the flag in one operation.
    pub fn take_needs_redraw(&self) -> bool {
        self.needs_redraw.swap(false, Ordering::Acquire)
    }

    /// Check the flag without clearing it
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw.load(Ordering::Acquire)
    }

    /// Total number of requests raised through this signal
    pub fn request_count(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for RedrawSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedrawSignal")
            .field("needs_redraw", &self.needs_redraw())
            .field("requests", &self.request_count())
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_take_needs_redraw_clears_flag() {
        let signal = RedrawSignal::new();
        assert!(!signal.take_needs_redraw());

        signal.request();
        assert!(signal.needs_redraw());
        assert!(signal.take_needs_redraw());
        assert!(!signal.take_needs_redraw());
        assert_eq!(signal.request_count(), 1);
    }

    #[test]
    fn test_clones_share_the_flag() {
        let signal = RedrawSignal::new();
        let clone = signal.clone();

        clone.request();
        assert!(signal.take_needs_redraw());
        assert_eq!(signal.request_count(), 1);
    }

    #[test]
    fn test_callback_fires_per_request() {
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wakes);
        let signal = RedrawSignal::with_callback(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        signal.request();
        signal.request();
        assert_eq!(wakes.load(Ordering::SeqCst), 2);
    }
}
