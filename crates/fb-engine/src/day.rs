//! The day-advancement state machine.
//!
//! One invocation = one simulated day, applied as a single transition:
//! snapshot, transit advancement, autopilot pass, next-day tendering, day
//! roll.  Nothing here can fail — every branch is a modeled game outcome —
//! so partial application is structurally impossible.

use fb_core::GameRng;
use fb_market::{CarrierAssignment, LoadStatus, generate_loads_for_day};

use crate::action::MarketCtx;
use crate::ledger::LedgerEntry;
use crate::state::{DailyCash, SimState};

/// Reputation credit for a completed delivery.
const REP_DELIVERY: i32 = 1;

/// What one day advancement did, for observers and logs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DayReport {
    /// Loads that reached 100% and paid out this day.
    pub delivered: usize,
    /// Narrative delay events rolled this day.
    pub delay_events: usize,
    /// Loads the autopilot covered this day.
    pub autopilot_booked: usize,
    /// Fresh loads tendered for the incoming day.
    pub tendered: usize,
}

/// Advance the simulation by one day.  See the crate docs for the phase
/// ordering; the day counter increments last, so every entry written here is
/// stamped with the day that is ending.
pub(crate) fn advance_day(
    state: &mut SimState,
    ctx:   &MarketCtx<'_>,
    rng:   &mut GameRng,
) -> DayReport {
    let mut report = DayReport::default();
    let today = state.day;

    // ── ① Snapshot pre-increment cash for the trend chart ────────────────
    state.daily_cash.push(DailyCash {
        day:  today,
        cash: state.profile.cash,
    });

    // ── ② Advance every dispatched load by one day ───────────────────────
    //
    // Split borrows: loads, ledger, and profile are disjoint fields.
    {
        let SimState {
            loads, ledger, profile, ..
        } = state;

        for load in loads.iter_mut() {
            let LoadStatus::Dispatched {
                carrier,
                margin,
                progress,
                days_in_transit,
                total_days,
            } = &mut load.status
            else {
                continue;
            };

            *days_in_transit += 1;

            // Narrative delay — ledger-only, transit time is not extended.
            if rng.gen_bool(ctx.tuning.delay_event_chance) {
                report.delay_events += 1;
                ledger.push(LedgerEntry::Event {
                    day:     today,
                    load:    Some(load.id),
                    message: format!("Delay on Load #{}: Traffic", load.id.tag()),
                });
            }

            // Progress is the larger of the forced bump (visible movement on
            // short hops) and the analytically correct fraction, clamped.
            let analytic = *days_in_transit as f64 / *total_days as f64 * 100.0;
            let forced = match ctx.tuning.forced_progress {
                Some((lo, hi)) => *progress + rng.gen_range(lo..hi),
                None           => analytic,
            };
            *progress = forced.max(analytic).min(100.0);

            if *progress >= 100.0 {
                // Deliver exactly once: the status leaves Dispatched here and
                // this arm never sees the load again.
                let margin = *margin;
                let carrier = carrier.clone();
                profile.cash += margin;
                profile.adjust_reputation(REP_DELIVERY);
                ledger.push(LedgerEntry::Delivery {
                    day:         today,
                    load:        load.id,
                    origin:      load.origin.clone(),
                    destination: load.destination.clone(),
                    carrier:     carrier.name.clone(),
                    margin,
                    success:     true,
                    message:     format!("Load #{} Delivered!", load.id.tag()),
                });
                load.status = LoadStatus::Delivered { carrier, margin };
                report.delivered += 1;
            }
        }
    }

    // ── ③ Autopilot pass ─────────────────────────────────────────────────
    if state.autopilot {
        run_autopilot(state, ctx, rng, &mut report);
    }

    // ── ④ Tender the incoming day's loads ────────────────────────────────
    let incoming = today.next();
    let mut fresh = generate_loads_for_day(
        &state.customers,
        ctx.cities,
        incoming,
        ctx.market,
        rng,
    );
    report.tendered = fresh.len();
    state.loads.append(&mut fresh);

    // ── ⑤ Roll the day counter ───────────────────────────────────────────
    state.day = incoming;

    report
}

/// Book every Available load at the standard market rate with the synthetic
/// AutoBroker carrier.
///
/// The success roll is recorded on the ledger entry but deliberately does
/// not gate the locked-in margin or cash, and no cash-availability check
/// gates the bookings — the autopilot covers unconditionally.
fn run_autopilot(
    state:  &mut SimState,
    ctx:    &MarketCtx<'_>,
    rng:    &mut GameRng,
    report: &mut DayReport,
) {
    let today = state.day;
    let SimState { loads, ledger, .. } = state;

    for load in loads.iter_mut() {
        if !load.is_available() {
            continue;
        }

        let margin = (load.revenue as f64 * ctx.tuning.autopilot_margin_fraction).floor() as i64;
        let success = rng.gen_bool(ctx.tuning.autopilot_success_rate);

        load.dispatch(
            CarrierAssignment {
                name:   "AutoBroker".to_string(),
                driver: "Bot".to_string(),
            },
            margin,
        );
        ledger.push(LedgerEntry::Booking {
            day:         today,
            load:        load.id,
            origin:      load.origin.clone(),
            destination: load.destination.clone(),
            carrier:     "AutoBroker".to_string(),
            margin,
            success,
            message:     format!("Auto Pilot booked Load #{}", load.id.tag()),
        });
        report.autopilot_booked += 1;
    }
}
