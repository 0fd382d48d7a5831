//! Callback test driver
//!
//! Runs the dispatcher for each selector with a continuation that renders the
//! pair it receives and copies the result slot into the driver's own scope.

use callback_dispatch::{Dispatcher, Outcome};
use std::io::{self, Write};

use crate::report::{self, OutputFormat};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub format: OutputFormat,
    /// Print the captured result after each dispatch returns
    pub show_captured: bool,
}

/// Outcome counts for a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub runs: usize,
    /// Includes selectors with no handler
    pub errors: usize,
    pub successes: usize,
}

/// Run one callback test and return the outcome the callback received
///
/// The result slot is also copied into a variable owned by this function from
/// inside the callback; with `show_captured` it is printed once dispatch returns.
pub fn run_callback_test<W: Write>(
    dispatcher: &Dispatcher,
    selector: i64,
    out: &mut W,
    options: RunOptions,
) -> io::Result<Outcome> {
    let mut captured: Option<String> = None;
    let mut received: Option<Outcome> = None;
    let mut written: io::Result<()> = Ok(());

    dispatcher.dispatch(selector, |err, res| {
        written = report::write_outcome(out, options.format, selector, err, res);
        captured = res.map(str::to_string);
        received = Outcome::from_pair(err, res);
    });
    written?;

    // The callback has already run, so the capture is populated here
    log::trace!("Selector {} captured {:?}", selector, captured);
    if options.show_captured {
        report::write_captured(out, options.format, selector, captured.as_deref())?;
    }

    received.ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("selector {} reported no single outcome", selector),
        )
    })
}

/// Run a callback test for every selector, in order
pub fn run_all<W: Write>(selectors: &[i64], out: &mut W, options: RunOptions) -> io::Result<RunSummary> {
    let dispatcher = Dispatcher::new();
    let mut summary = RunSummary::default();

    for &selector in selectors {
        let outcome = run_callback_test(&dispatcher, selector, out, options)?;

        summary.runs += 1;
        if outcome.is_error() {
            summary.errors += 1;
        } else {
            summary.successes += 1;
        }
    }

    out.flush()?;
    log::debug!(
        "Completed {} callback tests ({} errors, {} successes)",
        summary.runs,
        summary.errors,
        summary.successes
    );
    Ok(summary)
}
