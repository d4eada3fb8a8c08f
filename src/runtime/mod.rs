//! Runtime module
//!
//! Task and stream handles shared by the client and the service layer.

pub mod async_task;

pub use async_task::{AsyncStream, AsyncTask, EmitterBuilder};
