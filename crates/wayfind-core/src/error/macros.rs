//! Error macros for wayfind

/// Macro for returning an invalid input error
#[macro_export]
macro_rules! bail_invalid {
    ($field:expr, $value:expr, $reason:expr) => {
        return Err($crate::error::WayfindError::invalid_input(
            $field, $value, $reason,
        ))
    };
}

/// Macro for returning a usage error
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::WayfindError::UsageError($msg.to_string()))
    };
}
