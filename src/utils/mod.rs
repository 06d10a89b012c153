//! Utility functions for slash-graphs

/// Timing utilities
pub mod timing {
    use std::time::Instant;

    /// Scoped timer that logs its elapsed time when dropped
    pub struct Timer {
        start: Instant,
        name: String,
    }

    impl Timer {
        /// Start new timer
        pub fn new(name: &str) -> Self {
            Timer {
                start: Instant::now(),
                name: name.to_string(),
            }
        }

        /// Get elapsed time in seconds
        pub fn elapsed(&self) -> f32 {
            self.start.elapsed().as_secs_f32()
        }

        /// Log elapsed time
        pub fn log(&self) {
            tracing::info!(timer = %self.name, elapsed_s = self.elapsed(), "timer finished");
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            self.log();
        }
    }
}
