//! One-shot, cancellable loading timer.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Owns the background task that signals the end of the loading screen.
///
/// The task only sleeps and then invokes its callback; it never touches
/// navigation state directly. Dropping the gate aborts a pending timer.
#[derive(Debug, Default)]
pub struct LoadingGate {
    handle: Option<JoinHandle<()>>,
}

impl LoadingGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the timer. Any previously armed timer is cancelled first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm<F>(&mut self, delay: Duration, on_elapsed: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_elapsed();
        }));
    }

    /// Abort a pending timer. Safe to call any number of times.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if !handle.is_finished() {
                tracing::debug!("Cancelling pending loading timer");
            }
            handle.abort();
        }
    }

    /// Whether a timer is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for LoadingGate {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_after_delay() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        let mut gate = LoadingGate::new();
        gate.arm(Duration::from_millis(500), move || {
            flag.store(true, Ordering::SeqCst);
        });
        assert!(gate.is_pending());

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(!fired.load(Ordering::SeqCst));

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(fired.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_callback() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        let mut gate = LoadingGate::new();
        gate.arm(Duration::from_millis(100), move || {
            flag.store(true, Ordering::SeqCst);
        });
        gate.cancel();
        gate.cancel();
        assert!(!gate.is_pending());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        {
            let mut gate = LoadingGate::new();
            gate.arm(Duration::from_millis(100), move || {
                flag.store(true, Ordering::SeqCst);
            });
        }
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }
}
