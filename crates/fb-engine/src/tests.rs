//! Integration tests for the engine: transitions, day advancement, autopilot.

use fb_catalog::{CarrierDirectory, CarrierProfile, CityMapBuilder, CityMap};
use fb_core::{CustomerId, Day, FleetKind, GameConfig, LoadId, MapPoint, LaneKind};

use crate::builder::GameBuilder;
use crate::error::EngineError;
use crate::game::Game;
use crate::ledger::{LedgerEntry, LedgerKind, LedgerStats};
use crate::tuning::EngineTuning;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(seed: u64) -> GameConfig {
    GameConfig {
        player_name: "Tester".to_string(),
        seed,
        ..Default::default()
    }
}

/// A single Any-fleet carrier that never breaks down — bookings through it
/// always succeed, which pins down the money paths.
fn reliable_carriers() -> CarrierDirectory {
    CarrierDirectory::new(vec![CarrierProfile::new("Always There", 100, FleetKind::Any)])
}

/// Two cities exactly `miles` apart (coordinates chosen so the 1.5 scale
/// lands on a whole number).
fn line_map(miles: u32) -> CityMap {
    let mut b = CityMapBuilder::new();
    b.add_city("Alpha", MapPoint::new(0.0, 0.0), LaneKind::Neutral, "A");
    b.add_city("Omega", MapPoint::new(miles as f32 / 1.5, 0.0), LaneKind::Neutral, "B");
    b.build()
}

/// Tuning with all luck removed: no delay events, purely analytic progress.
fn no_luck_tuning() -> EngineTuning {
    EngineTuning {
        delay_event_chance: 0.0,
        forced_progress:    None,
        ..Default::default()
    }
}

/// Game with one reliable carrier, a deterministic 900-mile lane, and one
/// High-volume starter customer (guarantees at least one load per day).
fn transit_game(seed: u64) -> Game {
    GameBuilder::new(test_config(seed))
        .cities(line_map(900))
        .carriers(reliable_carriers())
        .tuning(no_luck_tuning())
        .starter_customers(vec![CustomerId(0)])
        .build()
        .unwrap()
}

fn first_available(game: &Game) -> LoadId {
    game.state()
        .available_loads()
        .next()
        .expect("a High-volume starter tenders at least one load")
        .id
}

/// Book the first available load through the (always matching, always
/// succeeding) reliable carrier; returns the booked id and its margin.
fn book_first(game: &mut Game) -> (LoadId, i64) {
    let id = first_available(game);
    let quote = game.quotes_for(id).unwrap()[0].clone();
    assert!(quote.equipment_match);
    let result = game.book(id, quote).unwrap();
    assert!(result.success);
    (id, result.final_margin)
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let game = GameBuilder::new(test_config(42)).build().unwrap();
        let state = game.state();
        assert_eq!(state.day, Day::FIRST);
        assert_eq!(state.profile.cash, 50_000);
        assert_eq!(state.profile.reputation, 100);
        assert!(!state.autopilot);
        // No customers yet → nothing tendered.
        assert!(state.customers.is_empty());
        assert!(state.loads.is_empty());
    }

    #[test]
    fn starters_are_free_and_seed_day_one() {
        let game = GameBuilder::new(test_config(42))
            .starter_customers(vec![CustomerId(0), CustomerId(1)])
            .build()
            .unwrap();
        let state = game.state();
        assert_eq!(state.profile.cash, 50_000); // no fee charged
        assert_eq!(state.customers.len(), 2);
        // Both starters are High volume → at least one load each.
        assert!(state.loads.len() >= 2);
        assert!(state.loads.iter().all(|l| l.is_available()));
        assert!(state.loads.iter().all(|l| l.created == Day::FIRST));
    }

    #[test]
    fn unknown_starter_errors() {
        let err = GameBuilder::new(test_config(42))
            .starter_customers(vec![CustomerId(99)])
            .build()
            .unwrap_err();
        assert!(matches!(err, EngineError::CustomerNotFound(_)));
    }

    #[test]
    fn too_few_cities_errors() {
        let err = GameBuilder::new(test_config(42))
            .cities(CityMap::default())
            .build()
            .unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn empty_carrier_directory_errors() {
        let err = GameBuilder::new(test_config(42))
            .carriers(CarrierDirectory::default())
            .build()
            .unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn resume_restores_a_snapshot() {
        let mut game = transit_game(42);
        game.advance_day();
        game.advance_day();
        let snapshot = game.state().clone();

        let resumed = GameBuilder::new(test_config(42))
            .cities(line_map(900))
            .carriers(reliable_carriers())
            .tuning(no_luck_tuning())
            .resume_from(snapshot.clone())
            .build()
            .unwrap();
        assert_eq!(*resumed.state(), snapshot);
    }
}

// ── Customer acquisition ──────────────────────────────────────────────────────

#[cfg(test)]
mod acquisition {
    use super::*;

    #[test]
    fn acquisition_deducts_fee_and_copies_profile() {
        let mut game = GameBuilder::new(test_config(42)).build().unwrap();
        game.acquire_customer(CustomerId(0)).unwrap();
        let state = game.state();
        assert_eq!(state.profile.cash, 50_000 - 5_000);
        assert_eq!(state.customers.len(), 1);
        assert_eq!(state.customers[0].name, "Home Depot");
        // The directory entry itself is untouched.
        assert_eq!(game.directory.len(), 6);
    }

    #[test]
    fn insufficient_funds_rejected_and_state_unchanged() {
        let config = GameConfig {
            starting_cash: 1_000,
            ..test_config(42)
        };
        let mut game = GameBuilder::new(config).build().unwrap();
        let before = game.state().clone();

        let err = game.acquire_customer(CustomerId(0)).unwrap_err();
        assert!(matches!(err, EngineError::InsufficientFunds { needed: 5_000, .. }));
        assert_eq!(*game.state(), before);
    }

    #[test]
    fn duplicate_acquisition_rejected() {
        let mut game = GameBuilder::new(test_config(42)).build().unwrap();
        game.acquire_customer(CustomerId(2)).unwrap();
        let before = game.state().clone();
        let err = game.acquire_customer(CustomerId(2)).unwrap_err();
        assert!(matches!(err, EngineError::AlreadyAcquired(_)));
        assert_eq!(*game.state(), before);
    }

    #[test]
    fn unknown_customer_errors() {
        let mut game = GameBuilder::new(test_config(42)).build().unwrap();
        let err = game.acquire_customer(CustomerId(42)).unwrap_err();
        assert!(matches!(err, EngineError::CustomerNotFound(_)));
    }

    #[test]
    fn prospects_shrink_as_customers_are_acquired() {
        let mut game = GameBuilder::new(test_config(42)).build().unwrap();
        assert_eq!(game.prospects().len(), 6);
        game.acquire_customer(CustomerId(0)).unwrap();
        assert_eq!(game.prospects().len(), 5);
    }
}

// ── Booking ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod booking {
    use super::*;

    #[test]
    fn successful_booking_updates_cash_rep_and_status() {
        let config = GameConfig {
            starting_reputation: 50,
            ..test_config(42)
        };
        let mut game = GameBuilder::new(config)
            .cities(line_map(900))
            .carriers(reliable_carriers())
            .tuning(no_luck_tuning())
            .starter_customers(vec![CustomerId(0)])
            .build()
            .unwrap();

        let (id, margin) = book_first(&mut game);
        let state = game.state();
        assert_eq!(state.profile.cash, 50_000 + margin);
        assert_eq!(state.profile.reputation, 51);
        assert!(state.load(id).unwrap().is_dispatched());

        // Booking ledger entry denormalizes the lane endpoints.
        let entry = state.ledger.last().unwrap();
        assert_eq!(entry.kind(), LedgerKind::Booking);
        assert_eq!(entry.success(), Some(true));
        match entry {
            LedgerEntry::Booking { origin, destination, .. } => {
                assert!(!origin.is_empty());
                assert!(!destination.is_empty());
                assert_ne!(origin, destination);
            }
            other => panic!("expected Booking, got {other:?}"),
        }
    }

    #[test]
    fn mismatch_booking_fails_with_thousand_penalty() {
        // Only a Dry Van fleet quoting Reefer freight: every quote mismatches.
        let config = GameConfig {
            starting_reputation: 50,
            ..test_config(42)
        };
        let mut game = GameBuilder::new(config)
            .carriers(CarrierDirectory::new(vec![CarrierProfile::new(
                "Wrongway",
                95,
                FleetKind::Only(fb_core::EquipmentMode::DryVan),
            )]))
            .starter_customers(vec![CustomerId(1)]) // Coca-Cola: Reefer, High
            .build()
            .unwrap();

        let id = first_available(&game);
        let quote = game.quotes_for(id).unwrap()[0].clone();
        assert!(!quote.equipment_match);

        let result = game.book(id, quote.clone()).unwrap();
        assert!(!result.success);
        assert_eq!(result.penalty, 1_000);
        assert_eq!(result.final_margin, quote.margin - 1_000);

        let state = game.state();
        assert_eq!(state.profile.cash, 50_000 + result.final_margin);
        assert_eq!(state.profile.reputation, 40); // 50 − 10
    }

    #[test]
    fn unknown_load_fails_loudly() {
        let mut game = transit_game(42);
        let ghost = LoadId::new(Day(9), CustomerId(9), 9);
        assert!(matches!(
            game.quotes_for(ghost).unwrap_err(),
            EngineError::LoadNotFound(_)
        ));
    }

    #[test]
    fn double_booking_rejected_without_side_effects() {
        let mut game = transit_game(42);
        let (id, _) = book_first(&mut game);
        let quote = fb_market::Quote {
            carrier: "Always There".to_string(),
            score: 100,
            fleet: FleetKind::Any,
            cost: 1,
            margin: 1,
            equipment_match: true,
            driver: "Bob".to_string(),
            truck_year: 2020,
        };
        let before = game.state().clone();
        let err = game
            .apply(crate::Action::ConfirmBooking {
                load:   id,
                quote,
                result: fb_market::BookingResult {
                    final_margin: 1,
                    success:      true,
                    message:      String::new(),
                    penalty:      0,
                },
            })
            .unwrap_err();
        assert!(matches!(err, EngineError::LoadNotAvailable(_)));
        assert_eq!(*game.state(), before);
    }
}

// ── Day advancement ───────────────────────────────────────────────────────────

#[cfg(test)]
mod day_advancement {
    use super::*;

    #[test]
    fn day_counter_increments_once_per_advance() {
        let mut game = transit_game(42);
        assert_eq!(game.state().day, Day(1));
        game.advance_day();
        assert_eq!(game.state().day, Day(2));
        game.advance_day();
        assert_eq!(game.state().day, Day(3));
    }

    #[test]
    fn cash_snapshot_keyed_by_pre_increment_day() {
        let mut game = transit_game(42);
        game.advance_day();
        let snap = game.state().daily_cash[0];
        assert_eq!(snap.day, Day(1));
        assert_eq!(snap.cash, 50_000);
    }

    #[test]
    fn new_loads_tendered_each_day() {
        let mut game = transit_game(42);
        let report = game.advance_day();
        assert!(report.tendered >= 1); // High-volume starter
        let latest = game.state().loads.last().unwrap();
        assert_eq!(latest.created, Day(2));
        assert!(latest.is_available());
    }

    #[test]
    fn analytic_progress_delivers_on_day_three() {
        // 900 mi → ceil(900/500)+1 = 3 transit days.  With forced progress
        // disabled, analytic progress is 33.3 / 66.7 / 100 — delivery on the
        // third advance, not earlier.
        let mut game = transit_game(42);
        let (id, margin) = book_first(&mut game);
        let cash_after_booking = game.state().profile.cash;

        game.advance_day();
        assert!(game.state().load(id).unwrap().is_dispatched());
        game.advance_day();
        assert!(game.state().load(id).unwrap().is_dispatched());
        let report = game.advance_day();

        assert_eq!(report.delivered, 1);
        assert!(game.state().load(id).unwrap().is_delivered());
        assert_eq!(game.state().profile.cash, cash_after_booking + margin);
    }

    #[test]
    fn progress_is_monotonic() {
        let mut game = GameBuilder::new(test_config(7))
            .cities(line_map(2_000))
            .carriers(reliable_carriers())
            .starter_customers(vec![CustomerId(0)])
            .build()
            .unwrap();
        let (id, _) = book_first(&mut game);

        let mut last = 0.0f64;
        for _ in 0..10 {
            game.advance_day();
            match &game.state().load(id).unwrap().status {
                fb_market::LoadStatus::Dispatched { progress, .. } => {
                    assert!(*progress >= last, "progress regressed: {progress} < {last}");
                    assert!(*progress <= 100.0);
                    last = *progress;
                }
                fb_market::LoadStatus::Delivered { .. } => break,
                other => panic!("unexpected status {other:?}"),
            }
        }
    }

    #[test]
    fn delivery_happens_exactly_once() {
        let mut game = transit_game(42);
        let (id, margin) = book_first(&mut game);
        let cash_after_booking = game.state().profile.cash;

        for _ in 0..10 {
            game.advance_day();
        }

        let deliveries = game
            .state()
            .ledger
            .iter()
            .filter(|e| matches!(e, LedgerEntry::Delivery { load, .. } if *load == id))
            .count();
        assert_eq!(deliveries, 1);
        // Credited once: later advances never re-pay the margin.
        assert_eq!(game.state().profile.cash, cash_after_booking + margin);
    }

    #[test]
    fn forced_progress_moves_visibly_from_day_one() {
        // Default tuning bumps at least 15 points per day even on a long lane
        // where analytic progress would crawl.
        let mut game = GameBuilder::new(test_config(42))
            .cities(line_map(5_000))
            .carriers(reliable_carriers())
            .starter_customers(vec![CustomerId(0)])
            .build()
            .unwrap();
        let (id, _) = book_first(&mut game);
        game.advance_day();
        match &game.state().load(id).unwrap().status {
            fb_market::LoadStatus::Dispatched { progress, .. } => {
                assert!(*progress >= 15.0, "got {progress}");
            }
            other => panic!("unexpected status {other:?}"),
        }
    }

    #[test]
    fn delay_events_log_but_do_not_delay() {
        // Force an event every transit day; delivery still lands on day 3.
        let tuning = EngineTuning {
            delay_event_chance: 1.0,
            forced_progress:    None,
            ..Default::default()
        };
        let mut game = GameBuilder::new(test_config(42))
            .cities(line_map(900))
            .carriers(reliable_carriers())
            .tuning(tuning)
            .starter_customers(vec![CustomerId(0)])
            .build()
            .unwrap();
        let (id, _) = book_first(&mut game);

        game.advance_day();
        game.advance_day();
        let report = game.advance_day();
        assert_eq!(report.delivered, 1);
        assert!(game.state().load(id).unwrap().is_delivered());

        let events = game
            .state()
            .ledger
            .iter()
            .filter(|e| e.kind() == LedgerKind::Event)
            .count();
        assert!(events >= 3, "one inert event per transit day, got {events}");
    }
}

// ── Reputation clamp ──────────────────────────────────────────────────────────

#[cfg(test)]
mod reputation {
    use super::*;

    #[test]
    fn never_exceeds_one_hundred() {
        let mut game = transit_game(42);
        let (_, _) = book_first(&mut game); // success would push past 100
        assert_eq!(game.state().profile.reputation, 100);
    }

    #[test]
    fn never_drops_below_zero() {
        let config = GameConfig {
            starting_reputation: 5,
            ..test_config(42)
        };
        let mut game = GameBuilder::new(config)
            .carriers(CarrierDirectory::new(vec![CarrierProfile::new(
                "Wrongway",
                95,
                FleetKind::Only(fb_core::EquipmentMode::DryVan),
            )]))
            .starter_customers(vec![CustomerId(1)]) // Reefer freight
            .build()
            .unwrap();

        let id = first_available(&game);
        let quote = game.quotes_for(id).unwrap()[0].clone();
        game.book(id, quote).unwrap(); // −10 from 5
        assert_eq!(game.state().profile.reputation, 0);
    }
}

// ── Autopilot ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod autopilot {
    use super::*;

    #[test]
    fn toggle_flips_the_flag() {
        let mut game = transit_game(42);
        assert!(!game.state().autopilot);
        assert!(game.toggle_autopilot());
        assert!(game.state().autopilot);
        assert!(!game.toggle_autopilot());
    }

    #[test]
    fn books_every_available_load_unconditionally() {
        let mut game = GameBuilder::new(test_config(42))
            .starter_customers(vec![CustomerId(0), CustomerId(5)])
            .build()
            .unwrap();
        let available = game.state().available_loads().count();
        assert!(available >= 3); // High + VeryHigh starters

        game.toggle_autopilot();
        let report = game.advance_day();
        assert_eq!(report.autopilot_booked, available);
        assert_eq!(
            game.state()
                .loads
                .iter()
                .filter(|l| l.created == Day(1) && l.is_available())
                .count(),
            0
        );
    }

    #[test]
    fn locks_standard_market_margin() {
        let mut game = GameBuilder::new(test_config(42))
            .starter_customers(vec![CustomerId(0)])
            .build()
            .unwrap();
        let expected: Vec<(LoadId, i64)> = game
            .state()
            .available_loads()
            .map(|l| (l.id, (l.revenue as f64 * 0.15).floor() as i64))
            .collect();

        game.toggle_autopilot();
        game.advance_day();

        for (id, want) in expected {
            match &game.state().load(id).unwrap().status {
                fb_market::LoadStatus::Dispatched { carrier, margin, .. } => {
                    assert_eq!(carrier.name, "AutoBroker");
                    assert_eq!(carrier.driver, "Bot");
                    assert_eq!(*margin, want);
                }
                other => panic!("unexpected status {other:?}"),
            }
        }
    }

    #[test]
    fn success_roll_does_not_gate_margin_or_cash() {
        // Even with a guaranteed-fail roll, every load is still booked at the
        // standard margin and cash stays untouched until delivery.
        let tuning = EngineTuning {
            autopilot_success_rate: 0.0,
            delay_event_chance:     0.0,
            ..Default::default()
        };
        let mut game = GameBuilder::new(test_config(42))
            .tuning(tuning)
            .starter_customers(vec![CustomerId(0)])
            .build()
            .unwrap();
        let cash_before = game.state().profile.cash;
        let available = game.state().available_loads().count();

        game.toggle_autopilot();
        let report = game.advance_day();

        assert_eq!(report.autopilot_booked, available);
        assert_eq!(game.state().profile.cash, cash_before);
        // The roll is recorded on the ledger, nothing more.
        for entry in &game.state().ledger {
            if let LedgerEntry::Booking { success, message, .. } = entry {
                assert!(message.starts_with("Auto Pilot booked"));
                assert!(!success);
            }
        }
    }

    #[test]
    fn run_days_reports_each_day() {
        use crate::observer::DayObserver;

        #[derive(Default)]
        struct Recorder {
            days: Vec<Day>,
        }
        impl DayObserver for Recorder {
            fn on_day_end(&mut self, day: Day, _report: &crate::DayReport) {
                self.days.push(day);
            }
        }

        let mut game = transit_game(42);
        game.toggle_autopilot();
        let mut recorder = Recorder::default();
        game.run_days(3, &mut recorder);
        assert_eq!(recorder.days, vec![Day(1), Day(2), Day(3)]);
        assert_eq!(game.state().day, Day(4));
    }
}

// ── Ledger analytics ──────────────────────────────────────────────────────────

#[cfg(test)]
mod analytics {
    use super::*;

    #[test]
    fn empty_ledger_reads_as_perfect() {
        let stats = LedgerStats::from_entries(&[]);
        assert_eq!(stats.on_time_performance(), 100.0);
        assert_eq!(stats.delivered_profit, 0);
    }

    #[test]
    fn aggregates_across_outcomes() {
        let mut game = transit_game(42);
        let (_, margin) = book_first(&mut game);
        for _ in 0..5 {
            game.advance_day();
        }
        let stats = game.stats();
        assert_eq!(stats.bookings, 1);
        assert_eq!(stats.successful_bookings, 1);
        assert_eq!(stats.deliveries, 1);
        assert_eq!(stats.delivered_profit, margin);
        assert_eq!(stats.on_time_performance(), 100.0);
        assert_eq!(stats.failed_bookings(), 0);
    }

    #[test]
    fn failures_drag_on_time_performance() {
        let mut game = GameBuilder::new(test_config(42))
            .carriers(CarrierDirectory::new(vec![CarrierProfile::new(
                "Wrongway",
                95,
                FleetKind::Only(fb_core::EquipmentMode::DryVan),
            )]))
            .starter_customers(vec![CustomerId(1)]) // Reefer: every quote mismatches
            .build()
            .unwrap();
        let id = first_available(&game);
        let quote = game.quotes_for(id).unwrap()[0].clone();
        game.book(id, quote).unwrap();

        let stats = game.stats();
        assert_eq!(stats.bookings, 1);
        assert_eq!(stats.successful_bookings, 0);
        assert_eq!(stats.on_time_performance(), 0.0);
    }
}

// ── Snapshot serialization (cargo test --features serde) ─────────────────────

#[cfg(feature = "serde")]
mod snapshot {
    use super::*;

    use crate::state::SimState;

    #[test]
    fn state_round_trips_through_json() {
        let mut game = transit_game(42);
        book_first(&mut game);
        game.advance_day();

        let blob = serde_json::to_string(game.state()).unwrap();
        let restored: SimState = serde_json::from_str(&blob).unwrap();
        assert_eq!(restored, *game.state());
    }

    #[test]
    fn restored_snapshot_resumes_cleanly() {
        let mut game = transit_game(42);
        game.advance_day();

        let blob = serde_json::to_string(game.state()).unwrap();
        let restored: SimState = serde_json::from_str(&blob).unwrap();

        let mut resumed = GameBuilder::new(test_config(42))
            .cities(line_map(900))
            .carriers(reliable_carriers())
            .tuning(no_luck_tuning())
            .resume_from(restored)
            .build()
            .unwrap();
        resumed.advance_day();
        assert_eq!(resumed.state().day, Day(3));
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism {
    use super::*;

    #[test]
    fn same_seed_replays_the_same_run() {
        let run = |seed: u64| {
            let mut game = GameBuilder::new(test_config(seed))
                .starter_customers(vec![CustomerId(0), CustomerId(5)])
                .build()
                .unwrap();
            game.toggle_autopilot();
            for _ in 0..5 {
                game.advance_day();
            }
            game.state().clone()
        };
        assert_eq!(run(1234), run(1234));
    }

    #[test]
    fn different_seeds_diverge() {
        let run = |seed: u64| {
            let mut game = GameBuilder::new(test_config(seed))
                .starter_customers(vec![CustomerId(0), CustomerId(5)])
                .build()
                .unwrap();
            game.toggle_autopilot();
            for _ in 0..5 {
                game.advance_day();
            }
            game.state().clone()
        };
        assert_ne!(run(1), run(2));
    }
}
