//! Embassy tasks
//!
//! A single task runs the lock; nothing else shares the lines.

pub mod lock;

pub use lock::lock_task;
