//! Course-1 exercises of an embedded systems course: buffer primitives,
//! integer/ASCII conversion and byte data set statistics.

pub mod config;
pub mod data;
pub mod error;
pub mod logger;
pub mod memory;
pub mod platform;
pub mod selftest;
pub mod stats;

pub use config::CourseConfig;
pub use error::{ConfigError, CourseError, DataError, MemoryError, Result};
pub use platform::Platform;
pub use stats::{Reporter, Statistics};
