//! Job status literals shared with the upstream job submitter.
//!
//! Status values are free-form strings owned by EMR Serverless. The only
//! value the notifier rewrites is [`SUCCESS`]: a finished compute run hands
//! over to the downstream transfer phase, so the row moves to
//! [`DATA_TRANSFER`] instead of a terminal state.

pub const SUCCESS: &str = "SUCCESS";
pub const FAILED: &str = "FAILED";
pub const DATA_TRANSFER: &str = "DATA_TRANSFER";

/// Map an EMR Serverless job run state to the status stored in the job table.
pub fn translate(state: &str) -> &str {
    match state {
        SUCCESS => DATA_TRANSFER,
        other => other,
    }
}

/// Whether diagnostics should be pulled for this job run state.
pub fn needs_diagnostics(state: &str) -> bool {
    state == FAILED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_becomes_data_transfer() {
        assert_eq!(translate("SUCCESS"), "DATA_TRANSFER");
    }

    #[test]
    fn test_other_states_pass_through() {
        for state in ["SUBMITTED", "PENDING", "SCHEDULED", "RUNNING", "FAILED", "CANCELLED", ""] {
            assert_eq!(translate(state), state);
        }
    }

    #[test]
    fn test_translation_is_case_sensitive() {
        assert_eq!(translate("success"), "success");
    }

    #[test]
    fn test_only_failed_needs_diagnostics() {
        assert!(needs_diagnostics("FAILED"));
        assert!(!needs_diagnostics("SUCCESS"));
        assert!(!needs_diagnostics("CANCELLED"));
        assert!(!needs_diagnostics(translate("SUCCESS")));
    }
}
