//! Explicit "swallow and continue" policy for optional work.
//!
//! Category discovery, opportunistic parsing and search probes may fail
//! without affecting the caller's request. Their errors are routed through
//! `best_effort`, which logs and drops them.

use std::fmt::Display;

/// Keep the value of a best-effort step, or log the failure and yield `None`
pub fn best_effort<T, E: Display>(context: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!(target: "oceanwp::best_effort", "{context} failed, continuing: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_becomes_none() {
        assert_eq!(best_effort::<u8, _>("step", Err("boom")), None);
        assert_eq!(best_effort::<_, String>("step", Ok(7)), Some(7));
    }
}
