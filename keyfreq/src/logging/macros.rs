//! Logging macros taking a message plus `"key" => value` context pairs
//!
//! Context values only need `Display`. Every macro expands to a call into
//! [`crate::logging::emit`] with the caller's module path as log target.

/// Log error with a [`Code`](crate::logging::Code)
#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr) => {
        $crate::logging::emit(
            $crate::logging::LogLevel::Error,
            module_path!(),
            Some($code),
            $message,
            &[],
        )
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        {
            let context: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            $crate::logging::emit(
                $crate::logging::LogLevel::Error,
                module_path!(),
                Some($code),
                $message,
                &context,
            )
        }
    };
}

/// Log success with a [`Code`](crate::logging::Code), at info level
#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr) => {
        $crate::logging::emit(
            $crate::logging::LogLevel::Info,
            module_path!(),
            Some($code),
            $message,
            &[],
        )
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        {
            let context: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            $crate::logging::emit(
                $crate::logging::LogLevel::Info,
                module_path!(),
                Some($code),
                $message,
                &context,
            )
        }
    };
}

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        $crate::logging::emit(
            $crate::logging::LogLevel::Info,
            module_path!(),
            None,
            $message,
            &[],
        )
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        {
            let context: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            $crate::logging::emit(
                $crate::logging::LogLevel::Info,
                module_path!(),
                None,
                $message,
                &context,
            )
        }
    };
}

/// Log warning message
#[macro_export]
macro_rules! log_warning {
    ($message:expr) => {
        $crate::logging::emit(
            $crate::logging::LogLevel::Warning,
            module_path!(),
            None,
            $message,
            &[],
        )
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        {
            let context: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            $crate::logging::emit(
                $crate::logging::LogLevel::Warning,
                module_path!(),
                None,
                $message,
                &context,
            )
        }
    };
}

/// Log debug message; context values are only formatted when debug is enabled
#[macro_export]
macro_rules! log_debug {
    ($message:expr) => {
        if $crate::logging::enabled($crate::logging::LogLevel::Debug, module_path!()) {
            $crate::logging::emit(
                $crate::logging::LogLevel::Debug,
                module_path!(),
                None,
                $message,
                &[],
            )
        }
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::enabled($crate::logging::LogLevel::Debug, module_path!()) {
            let context: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            $crate::logging::emit(
                $crate::logging::LogLevel::Debug,
                module_path!(),
                None,
                $message,
                &context,
            )
        }
    };
}
