pub mod config;
pub mod logging;

#[doc(hidden)]
pub use tracing as __tracing;
