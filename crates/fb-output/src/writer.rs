//! The `ExportWriter` trait implemented by export backends.

use crate::{DailyCashRow, LedgerRow, OutputResult};

/// A sink for flattened game history.  CSV is the stock implementation;
/// alternative backends slot in here without touching the export logic.
pub trait ExportWriter {
    /// Write a batch of ledger rows.
    fn write_ledger(&mut self, rows: &[LedgerRow]) -> OutputResult<()>;

    /// Write a batch of daily cash rows.
    fn write_daily_cash(&mut self, rows: &[DailyCashRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
