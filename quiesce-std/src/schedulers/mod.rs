//! Standard scheduler implementations.

pub mod manual;
#[cfg(feature = "tokio")]
pub mod runtime;

pub use manual::{ManualScheduler, ManualTimer};
#[cfg(feature = "tokio")]
pub use runtime::TokioScheduler;
