//! Day observer trait for progress reporting during multi-day runs.

use fb_core::Day;

use crate::day::DayReport;

/// Callbacks invoked by [`Game::run_days`][crate::Game::run_days] at day
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The core never calls back into the
/// presentation layer on its own — these hooks fire only inside a run the
/// caller started.
///
/// # Example — session printer
///
/// ```rust,ignore
/// struct SessionPrinter;
///
/// impl DayObserver for SessionPrinter {
///     fn on_day_end(&mut self, day: Day, report: &DayReport) {
///         println!("{day}: delivered {}, tendered {}", report.delivered, report.tendered);
///     }
/// }
/// ```
pub trait DayObserver {
    /// Called before a day is advanced.
    fn on_day_start(&mut self, _day: Day) {}

    /// Called after a day completes, with what it did.
    fn on_day_end(&mut self, _day: Day, _report: &DayReport) {}
}

/// A [`DayObserver`] that does nothing.  Use when you need to call
/// `run_days` but don't want callbacks.
pub struct NoopObserver;

impl DayObserver for NoopObserver {}
