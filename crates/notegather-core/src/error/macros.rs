//! Error macros for notegather

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GatherError::invalid_value($context, $value))
    };
}

