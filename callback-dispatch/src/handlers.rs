//! Outcome handlers
//!
//! Each handler receives the caller's continuation and invokes it with a fixed
//! error-first pair. The handler does not know what the continuation does.

use crate::types::{ERROR_MESSAGE, SUCCESS_MESSAGE, UNKNOWN_MESSAGE};

/// Report the error outcome: `(error, null)`
pub fn call_error<F>(cb: F)
where
    F: FnOnce(Option<&str>, Option<&str>),
{
    log::trace!("call_error: invoking continuation");
    cb(Some(ERROR_MESSAGE), None);
}

/// Report the success outcome: `(null, result)`
pub fn call_success<F>(cb: F)
where
    F: FnOnce(Option<&str>, Option<&str>),
{
    log::trace!("call_success: invoking continuation");
    cb(None, Some(SUCCESS_MESSAGE));
}

/// Report an unrecognised selector through the error slot
pub(crate) fn call_unknown<F>(cb: F)
where
    F: FnOnce(Option<&str>, Option<&str>),
{
    log::trace!("call_unknown: invoking continuation");
    cb(Some(UNKNOWN_MESSAGE), None);
}
