use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

/// Quiet window used by the viewport observer.
pub const DEBOUNCE_WAIT: Duration = Duration::from_millis(99);

type Callback<A> = Arc<dyn Fn(A) + Send + Sync>;

struct Pending<A> {
    args: Option<A>,
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

/// Trailing-edge debounce.
///
/// Every [`Debounce::call`] replaces the pending argument and restarts the timer;
/// the callback runs once, with the last argument, after `wait` passes without
/// another call. Timers run on the ambient Tokio runtime.
///
/// A zero `wait` turns the debounce off: every call runs the callback on the
/// calling thread and no runtime is needed. Hosts without a runtime should pick
/// this explicitly.
pub struct Debounce<A> {
    wait: Duration,
    callback: Callback<A>,
    pending: Arc<Mutex<Pending<A>>>,
}

impl<A: Send + 'static> Debounce<A> {
    pub fn new(wait: Duration, callback: impl Fn(A) + Send + Sync + 'static) -> Self {
        Self {
            wait,
            callback: Arc::new(callback),
            pending: Arc::new(Mutex::new(Pending { args: None, generation: 0, timer: None })),
        }
    }

    /// Synchronous variant, same as `Debounce::new(Duration::ZERO, callback)`.
    pub fn immediate(callback: impl Fn(A) + Send + Sync + 'static) -> Self {
        Self::new(Duration::ZERO, callback)
    }

    /// Schedules the callback, discarding any call still waiting.
    ///
    /// With a zero wait the callback runs before this returns. A non-zero wait
    /// outside a Tokio runtime has no timer to wait on: the call is applied
    /// immediately and a warning is logged.
    pub fn call(&self, args: A) {
        if self.is_immediate() {
            (self.callback)(args);
            return;
        }
        let Ok(runtime) = Handle::try_current() else {
            warn!(wait = ?self.wait, "Debounced call outside a Tokio runtime, running immediately");
            (self.callback)(args);
            return;
        };

        let mut pending = self.pending.lock();
        pending.args = Some(args);
        pending.generation = pending.generation.wrapping_add(1);
        if let Some(timer) = pending.timer.take() {
            timer.abort();
        }

        let generation = pending.generation;
        let shared = Arc::clone(&self.pending);
        let callback = Arc::clone(&self.callback);
        let wait = self.wait;

        pending.timer = Some(runtime.spawn(async move {
            tokio::time::sleep(wait).await;
            let args = {
                let mut pending = shared.lock();
                // Superseded or cancelled while sleeping.
                if pending.generation != generation {
                    return;
                }
                pending.timer = None;
                pending.args.take()
            };
            if let Some(args) = args {
                callback(args);
            }
        }));

        trace!(generation, wait = ?wait, "Debounced call scheduled");
    }

    /// Drops the pending call, if any. A timer that wakes afterwards does nothing.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock();
        pending.generation = pending.generation.wrapping_add(1);
        pending.args = None;
        if let Some(timer) = pending.timer.take() {
            timer.abort();
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.lock().args.is_some()
    }

    #[must_use]
    pub const fn wait(&self) -> Duration {
        self.wait
    }

    /// Whether calls bypass the timer.
    #[must_use]
    pub const fn is_immediate(&self) -> bool {
        self.wait.is_zero()
    }
}

impl<A> Drop for Debounce<A> {
    fn drop(&mut self) {
        if let Some(timer) = self.pending.lock().timer.take() {
            timer.abort();
        }
    }
}

impl<A> fmt::Debug for Debounce<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pending = self.pending.lock();
        f.debug_struct("Debounce")
            .field("wait", &self.wait)
            .field("pending", &pending.args.is_some())
            .field("generation", &pending.generation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::sleep;

    fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl Fn(u32) + Send + Sync + 'static) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        (calls, move |value| sink.lock().push(value))
    }

    #[tokio::test(start_paused = true)]
    async fn burst_fires_once_with_last_argument() {
        let (calls, callback) = recorder();
        let debounce = Debounce::new(DEBOUNCE_WAIT, callback);

        debounce.call(1);
        debounce.call(2);
        debounce.call(3);
        assert!(debounce.is_pending());

        sleep(Duration::from_millis(150)).await;
        assert_eq!(*calls.lock(), vec![3]);
        assert!(!debounce.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn window_restarts_on_every_call() {
        let (calls, callback) = recorder();
        let debounce = Debounce::new(DEBOUNCE_WAIT, callback);

        debounce.call(1);
        sleep(Duration::from_millis(60)).await;
        debounce.call(2);
        sleep(Duration::from_millis(60)).await;
        assert!(calls.lock().is_empty(), "quiet window is measured from the latest call");

        sleep(Duration::from_millis(60)).await;
        assert_eq!(*calls.lock(), vec![2]);
    }

    #[tokio::test(start_paused = true)]
    async fn separate_bursts_fire_separately() {
        let (calls, callback) = recorder();
        let debounce = Debounce::new(DEBOUNCE_WAIT, callback);

        debounce.call(1);
        sleep(Duration::from_millis(120)).await;
        debounce.call(2);
        sleep(Duration::from_millis(120)).await;

        assert_eq!(*calls.lock(), vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_pending_call() {
        let (calls, callback) = recorder();
        let debounce = Debounce::new(DEBOUNCE_WAIT, callback);

        debounce.call(7);
        debounce.cancel();
        assert!(!debounce.is_pending());

        sleep(Duration::from_millis(200)).await;
        assert!(calls.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn zero_wait_runs_inline_even_inside_a_runtime() {
        let (calls, callback) = recorder();
        let debounce = Debounce::immediate(callback);
        assert!(debounce.is_immediate());

        debounce.call(1);
        debounce.call(2);

        assert_eq!(*calls.lock(), vec![1, 2]);
        assert!(!debounce.is_pending());
    }

    #[test]
    fn zero_wait_needs_no_runtime() {
        let (calls, callback) = recorder();
        let debounce = Debounce::new(Duration::ZERO, callback);

        debounce.call(4);
        debounce.cancel();

        assert_eq!(*calls.lock(), vec![4]);
    }

    #[test]
    fn runs_immediately_without_runtime() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let debounce = Debounce::new(DEBOUNCE_WAIT, move |()| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        debounce.call(());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
