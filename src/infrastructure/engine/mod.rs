pub mod local;
pub mod worker;

// Re-export for convenience
pub use local::LocalEngine;
pub use worker::WorkerEngine;
