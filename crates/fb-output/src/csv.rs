//! CSV export backend.
//!
//! Creates two files in the configured output directory:
//! - `ledger.csv`
//! - `daily_cash.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ExportWriter;
use crate::{DailyCashRow, LedgerRow, OutputResult};

/// Writes game history to two CSV files.
pub struct CsvExporter {
    ledger:     Writer<File>,
    daily_cash: Writer<File>,
    finished:   bool,
}

impl CsvExporter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut ledger = Writer::from_path(dir.join("ledger.csv"))?;
        ledger.write_record([
            "day", "kind", "load", "origin", "destination", "carrier", "margin", "success",
            "message",
        ])?;

        let mut daily_cash = Writer::from_path(dir.join("daily_cash.csv"))?;
        daily_cash.write_record(["day", "cash"])?;

        Ok(Self {
            ledger,
            daily_cash,
            finished: false,
        })
    }
}

/// Empty cell for `None`, otherwise the value's decimal form.
fn opt_cell<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

impl ExportWriter for CsvExporter {
    fn write_ledger(&mut self, rows: &[LedgerRow]) -> OutputResult<()> {
        for row in rows {
            self.ledger.write_record(&[
                row.day.to_string(),
                row.kind.to_string(),
                row.load.clone(),
                row.origin.clone(),
                row.destination.clone(),
                row.carrier.clone(),
                opt_cell(row.margin),
                opt_cell(row.success.map(|s| s as u8)),
                row.message.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_daily_cash(&mut self, rows: &[DailyCashRow]) -> OutputResult<()> {
        for row in rows {
            self.daily_cash
                .write_record(&[row.day.to_string(), row.cash.to_string()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.ledger.flush()?;
        self.daily_cash.flush()?;
        Ok(())
    }
}
