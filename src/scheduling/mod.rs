//! Batching of workloads and assembly of full measurement schedules
//!
//! Cluster reductions and instruction expansions are independent of each
//! other once grouped, so they are packed into bounded chunks and handed to
//! a thread pool one chunk at a time.

pub mod chunker;
pub mod dispatch;
pub mod scheduler;

pub use chunker::pack;
pub use dispatch::map_chunks;
pub use scheduler::MeasurementScheduler;
