//! Conditional logging macros gated on a module-level `ENABLE_LOGS` flag.
//!
//! Modules that want their logging switchable at compile time define
//!
//! ```rust
//! const ENABLE_LOGS: bool = true;
//! ```
//!
//! and use the crate-root macros:
//!
//! ```rust,ignore
//! use crate::{log_info, log_warn};
//!
//! log_warn!("metrics fetch attempt {} failed", attempt);
//! ```

/// Conditional info logging; checks `ENABLE_LOGS` in the calling module.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

/// Conditional warn logging; checks `ENABLE_LOGS` in the calling module.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}

/// Conditional error logging; checks `ENABLE_LOGS` in the calling module.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::error!($($arg)*);
        }
    };
}
