//! Main dispatcher API
//!
//! The dispatcher maps an integer selector to one of three outcome handlers and
//! reports the outcome through the caller's continuation. The continuation runs
//! inline, exactly once, before `dispatch` returns.

use crate::handlers::{call_error, call_success, call_unknown};
use crate::types::{
    Outcome, OutcomeKind, ERROR_MESSAGE, ERROR_SELECTOR, SUCCESS_MESSAGE, SUCCESS_SELECTOR,
    UNKNOWN_MESSAGE,
};

/// Look up which branch handles `selector`
pub fn classify(selector: i64) -> OutcomeKind {
    match selector {
        ERROR_SELECTOR => OutcomeKind::Error,
        SUCCESS_SELECTOR => OutcomeKind::Success,
        _ => OutcomeKind::Unknown,
    }
}

/// Dispatch `selector` and hand the error-first pair to `continuation`
///
/// Selectors without a dedicated handler are not a failure: they are reported
/// through the error slot like any other outcome.
///
/// # Example
/// ```
/// use callback_dispatch::dispatch;
///
/// let mut captured = None;
/// dispatch(2, |err, res| {
///     assert!(err.is_none());
///     captured = res.map(str::to_string);
/// });
/// assert_eq!(captured.as_deref(), Some("This is a success!"));
/// ```
pub fn dispatch<F>(selector: i64, continuation: F)
where
    F: FnOnce(Option<&str>, Option<&str>),
{
    let kind = classify(selector);
    log::debug!("Dispatching selector {} to {} handler", selector, kind);

    match kind {
        OutcomeKind::Error => call_error(continuation),
        OutcomeKind::Success => call_success(continuation),
        OutcomeKind::Unknown => call_unknown(continuation),
    }
}

/// The owned `Outcome` that `dispatch` reports for `selector`
pub fn outcome_for(selector: i64) -> Outcome {
    match classify(selector) {
        OutcomeKind::Error => Outcome::Error(ERROR_MESSAGE.to_string()),
        OutcomeKind::Success => Outcome::Success(SUCCESS_MESSAGE.to_string()),
        OutcomeKind::Unknown => Outcome::Error(UNKNOWN_MESSAGE.to_string()),
    }
}

/// Entry point for dispatching selectors
///
/// Holds no state; every call is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher;

impl Dispatcher {
    /// Create a new dispatcher handle
    pub fn new() -> Self {
        Self
    }

    /// See [`dispatch`]
    pub fn dispatch<F>(&self, selector: i64, continuation: F)
    where
        F: FnOnce(Option<&str>, Option<&str>),
    {
        dispatch(selector, continuation);
    }

    /// See [`outcome_for`]
    pub fn outcome_for(&self, selector: i64) -> Outcome {
        outcome_for(selector)
    }

    /// See [`classify`]
    pub fn classify(&self, selector: i64) -> OutcomeKind {
        classify(selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(1), OutcomeKind::Error);
        assert_eq!(classify(2), OutcomeKind::Success);
        assert_eq!(classify(9), OutcomeKind::Unknown);
        assert_eq!(classify(0), OutcomeKind::Unknown);
        assert_eq!(classify(-1), OutcomeKind::Unknown);
    }

    #[test]
    fn test_dispatch_error_selector() {
        let mut seen = None;
        dispatch(1, |err, res| {
            seen = Some((err.map(str::to_string), res.map(str::to_string)));
        });
        assert_eq!(seen, Some((Some(ERROR_MESSAGE.to_string()), None)));
    }

    #[test]
    fn test_dispatch_success_selector() {
        let mut seen = None;
        dispatch(2, |err, res| {
            seen = Some((err.map(str::to_string), res.map(str::to_string)));
        });
        assert_eq!(seen, Some((None, Some(SUCCESS_MESSAGE.to_string()))));
    }

    #[test]
    fn test_dispatch_unknown_selector() {
        let mut seen = None;
        dispatch(9, |err, res| {
            seen = Some((err.map(str::to_string), res.map(str::to_string)));
        });
        assert_eq!(seen, Some((Some(UNKNOWN_MESSAGE.to_string()), None)));
    }

    #[test]
    fn test_outcome_for() {
        assert_eq!(outcome_for(1), Outcome::Error(ERROR_MESSAGE.to_string()));
        assert_eq!(outcome_for(2), Outcome::Success(SUCCESS_MESSAGE.to_string()));
        assert_eq!(outcome_for(i64::MAX), Outcome::Error(UNKNOWN_MESSAGE.to_string()));
    }

    #[test]
    fn test_outcome_for_matches_dispatch() {
        for selector in -5..=15 {
            let mut reported = None;
            dispatch(selector, |err, res| reported = Outcome::from_pair(err, res));
            assert_eq!(reported, Some(outcome_for(selector)), "selector {}", selector);
        }
    }

    #[test]
    fn test_dispatcher_handle() {
        let dispatcher = Dispatcher::new();
        assert_eq!(dispatcher.classify(2), OutcomeKind::Success);
        assert_eq!(dispatcher.outcome_for(9).error(), Some(UNKNOWN_MESSAGE));

        let mut calls = 0;
        dispatcher.dispatch(1, |_, _| calls += 1);
        assert_eq!(calls, 1);
    }
}
