//! Status macros forwarding to `tracing`.
//!
//! The `status` field lets the terminal formatter pick a symbol that differs from the
//! plain level, e.g. `success!` is logged at INFO but rendered as a success line.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(status = "success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!($($arg)*)
    };
}
