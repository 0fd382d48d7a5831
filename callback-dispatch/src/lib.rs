//! Callback Dispatch Library
//!
//! A stateless library showing callback-style control flow: a selector and a
//! continuation go in, one outcome handler runs, and the continuation is called
//! back with an error-first `(error, result)` pair.
//!
//! # Architecture
//!
//! - `dispatch` picks a branch from the selector
//! - the branch's handler invokes the continuation synchronously
//! - exactly one slot of the pair is filled
//!
//! The library does NOT print anything. Rendering the outcome is up to the
//! caller (see callback-demo-cli).
//!
//! # Example Usage
//!
//! ```
//! use callback_dispatch::{dispatch, outcome_for, Outcome};
//!
//! dispatch(1, |err, res| {
//!     println!("Error: {:?}", err);
//!     println!("Result: {:?}", res);
//! });
//!
//! assert_eq!(outcome_for(2), Outcome::Success("This is a success!".to_string()));
//! ```

// Public modules
pub mod dispatcher;
pub mod handlers;
pub mod types;

// Re-export main types for convenience
pub use dispatcher::{classify, dispatch, outcome_for, Dispatcher};
pub use handlers::{call_error, call_success};
pub use types::{
    Outcome, OutcomeKind, ERROR_MESSAGE, ERROR_SELECTOR, SUCCESS_MESSAGE, SUCCESS_SELECTOR,
    UNKNOWN_MESSAGE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
