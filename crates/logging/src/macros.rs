//! crates/logging/src/macros.rs
//! Call-site convenience for [`Logger::log`](crate::Logger::log).

/// Logs a registered message, building its [`FormatArgs`](crate::FormatArgs)
/// inline.
///
/// Positional arguments follow the code, separated by commas. Named
/// arguments follow a semicolon as `name = value` pairs. The expansion
/// evaluates to the `Result` returned by `log`.
///
/// ```
/// use logging::{Logger, LoggerConfig, Severity, log_code};
///
/// let mut logger = Logger::with_writer(LoggerConfig::new("demo"), Vec::<u8>::new())?;
/// logger.add_message("SYN-1", "", Severity::Error, 0, "syntax error on line {}:{}")?;
/// logger.add_message("CMP-1", "", Severity::Critical, 0, "{a} > {b}")?;
///
/// log_code!(logger, "SYN-1", "/src/main.rs", 42)?;
/// log_code!(logger, "CMP-1"; a = 42, b = 24)?;
///
/// assert_eq!(logger.entries()[1].output(), "CRITICAL: 42 > 24 (CMP-1)");
/// # Ok::<(), logging::LogError>(())
/// ```
#[macro_export]
macro_rules! log_code {
    ($logger:expr, $code:expr $(, $arg:expr)* $(; $($name:ident = $value:expr),+)?) => {{
        #[allow(unused_mut)]
        let mut args = $crate::FormatArgs::new();
        $( args.push($arg); )*
        $( $( args.insert(::core::stringify!($name), $value); )+ )?
        $logger.log($code, &args)
    }};
}
