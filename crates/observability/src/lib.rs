//! Tracing/logging setup for binaries and tests.

mod tracing_init;

pub use tracing_init::init;
