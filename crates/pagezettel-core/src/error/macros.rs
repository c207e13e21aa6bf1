//! Error macros for pagezettel

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::ZettelError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting a template definition
#[macro_export]
macro_rules! bail_template {
    ($reason:expr) => {
        return Err($crate::error::ZettelError::InvalidTemplate {
            reason: $reason.to_string(),
        })
    };
}
