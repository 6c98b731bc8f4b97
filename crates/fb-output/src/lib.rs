//! `fb-output` — ledger and financial-history export for freight_broker.
//!
//! The engine keeps its activity ledger and daily cash history in memory as
//! part of [`fb_engine::SimState`]; this crate flattens them into plain rows
//! and writes them through an [`ExportWriter`] backend.  CSV is the stock
//! backend, producing two files:
//!
//! | File             | Contents                                  |
//! |------------------|-------------------------------------------|
//! | `ledger.csv`     | One row per booking / delivery / event    |
//! | `daily_cash.csv` | One row per completed day: (day, cash)    |
//!
//! # Usage
//!
//! ```rust,ignore
//! use fb_output::{CsvExporter, export_state};
//!
//! let mut writer = CsvExporter::new(Path::new("./reports"))?;
//! export_state(game.state(), &mut writer)?;
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod row;
pub mod writer;


pub use csv::CsvExporter;
pub use error::{OutputError, OutputResult};
pub use export::export_state;
pub use row::{DailyCashRow, LedgerRow};
pub use writer::ExportWriter;
