//! Error handling and exit codes.

use smdcode_core::SmdError;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// The code failed to decode or a value failed to format.
    pub const ERROR_DECODE: i32 = 1;
    /// Invalid invocation (e.g. no code supplied).
    pub const ERROR_USAGE: i32 = 2;
}

/// Map a codec error to the process exit code.
#[must_use]
pub fn handle_error(err: &SmdError) -> i32 {
    match err {
        SmdError::InvalidCode { .. } | SmdError::InvalidValue(_) => exit_codes::ERROR_DECODE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        let err = SmdError::InvalidCode {
            code: "zz".into(),
            reason: "unrecognized code".into(),
        };
        assert_eq!(handle_error(&err), 1);
        assert_eq!(handle_error(&SmdError::InvalidValue(-1.0)), 1);
    }
}
