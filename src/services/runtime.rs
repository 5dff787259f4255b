//! Tokio Runtime Bridge
//!
//! GPUI drives its own executor; the dev asset server needs tokio. This module
//! hosts a global tokio runtime for background services spawned from the GPUI
//! side.

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create tokio runtime"))
}

/// Spawn a detached task in the tokio runtime
///
/// Used for long-running background tasks like the dev asset server. The task
/// runs independently and its result is not awaited.
pub fn spawn_in_tokio<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    get_runtime().spawn(future);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_in_tokio() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let flag = Arc::new(AtomicBool::new(false));
        let flag_clone = flag.clone();

        spawn_in_tokio(async move {
            flag_clone.store(true, Ordering::SeqCst);
        });

        // Give the task time to complete
        std::thread::sleep(std::time::Duration::from_millis(100));
        assert!(flag.load(Ordering::SeqCst));
    }
}
