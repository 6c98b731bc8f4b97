//! Flattening engine state into export rows.

use fb_engine::{LedgerEntry, SimState};

use crate::row::{DailyCashRow, LedgerRow};
use crate::writer::ExportWriter;
use crate::OutputResult;

impl From<&LedgerEntry> for LedgerRow {
    fn from(entry: &LedgerEntry) -> Self {
        match entry {
            LedgerEntry::Booking {
                day,
                load,
                origin,
                destination,
                carrier,
                margin,
                success,
                message,
            }
            | LedgerEntry::Delivery {
                day,
                load,
                origin,
                destination,
                carrier,
                margin,
                success,
                message,
            } => LedgerRow {
                day:         day.0,
                kind:        entry.kind().as_str(),
                load:        load.tag(),
                origin:      origin.clone(),
                destination: destination.clone(),
                carrier:     carrier.clone(),
                margin:      Some(*margin),
                success:     Some(*success),
                message:     message.clone(),
            },
            LedgerEntry::Event { day, load, message } => LedgerRow {
                day:         day.0,
                kind:        entry.kind().as_str(),
                load:        load.map(|id| id.tag()).unwrap_or_default(),
                origin:      String::new(),
                destination: String::new(),
                carrier:     String::new(),
                margin:      None,
                success:     None,
                message:     message.clone(),
            },
        }
    }
}

/// Flatten a full game state and write it through `writer`, finishing the
/// writer on success.
pub fn export_state<W: ExportWriter>(state: &SimState, writer: &mut W) -> OutputResult<()> {
    let ledger: Vec<LedgerRow> = state.ledger.iter().map(LedgerRow::from).collect();
    writer.write_ledger(&ledger)?;

    let cash: Vec<DailyCashRow> = state
        .daily_cash
        .iter()
        .map(|d| DailyCashRow {
            day:  d.day.0,
            cash: d.cash,
        })
        .collect();
    writer.write_daily_cash(&cash)?;

    writer.finish()
}
