//! crates/logging/src/tracing_macros.rs
//! Targets for the library's own diagnostics.
//!
//! These wrap the standard tracing macros so every internal event lands
//! under a `codelog::*` target that subscribers can filter on, for example
//! `RUST_LOG=codelog::throttle=debug`.

/// Emit a registry event (registrations, catalogue imports).
macro_rules! trace_registry {
    ($level:ident, $($arg:tt)*) => {
        ::tracing::$level!(target: "codelog::registry", $($arg)*)
    };
}

/// Emit a throttle event (cap reached, suppression).
macro_rules! trace_throttle {
    ($level:ident, $($arg:tt)*) => {
        ::tracing::$level!(target: "codelog::throttle", $($arg)*)
    };
}

/// Emit a sink event (file opened, closed, write failures).
macro_rules! trace_sink {
    ($level:ident, $($arg:tt)*) => {
        ::tracing::$level!(target: "codelog::sink", $($arg)*)
    };
}
