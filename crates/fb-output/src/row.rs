//! Plain data row types written by export backends.

/// One flattened activity-ledger entry.
///
/// Event entries carry no lane or money columns; those are exported empty
/// rather than zeroed so a reader can tell "no value" from "zero margin".
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerRow {
    pub day:         u32,
    /// `BOOKING`, `DELIVERY`, or `EVENT`.
    pub kind:        &'static str,
    /// Load tag (`D3-C1-0`); empty for events not tied to a load.
    pub load:        String,
    pub origin:      String,
    pub destination: String,
    pub carrier:     String,
    pub margin:      Option<i64>,
    pub success:     Option<bool>,
    pub message:     String,
}

/// One point on the cash trend: end-of-day cash keyed by the day that ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCashRow {
    pub day:  u32,
    pub cash: i64,
}
