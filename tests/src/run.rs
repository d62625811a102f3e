use crate::Setup;

use std::sync::Arc;

/// Owns the runtime a database test runs on and drops the test's tables
/// once it finishes, even when it panics.
pub struct DbTest<S: Setup> {
    runtime: tokio::runtime::Runtime,
    setup: Arc<S>,
}

impl<S: Setup> DbTest<S> {
    /// Create a new test with a current-thread runtime.
    pub fn new(setup: S) -> Self {
        crate::init_tracing();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("failed to create Tokio runtime");

        Self {
            runtime,
            setup: Arc::new(setup),
        }
    }

    pub fn run_test<F, Fut>(&mut self, test_fn: F)
    where
        F: FnOnce(Arc<S>) -> Fut,
        Fut: std::future::Future<Output = ()>,
    {
        let setup = self.setup.clone();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            self.runtime.block_on(test_fn(setup));
        }));

        let _ = self.runtime.block_on(self.setup.cleanup_my_tables());

        if let Err(panic) = result {
            std::panic::resume_unwind(panic);
        }
    }
}
