//! Behavioural contract of the two core operations, exercised through the
//! public API only.

use std::collections::HashMap;

use launch_intel::dataset::{MissionType, MISSION_COUNT};
use launch_intel::sim::{detect_events, EventKind, LaunchParams};
use launch_intel::{generate_missions, run_ascent_simulation, LaunchError};

// ---------------------------------------------------------------------------
// Mission dataset
// ---------------------------------------------------------------------------

#[test]
fn dataset_is_reproducible() {
    let a = generate_missions(42);
    let b = generate_missions(42);
    assert_eq!(a, b);
}

#[test]
fn dataset_type_counts_are_balanced() {
    for seed in [0, 42, 2024] {
        let records = generate_missions(seed);
        assert_eq!(records.len(), MISSION_COUNT);
        let mut counts: HashMap<MissionType, usize> = HashMap::new();
        for r in &records {
            *counts.entry(r.mission_type).or_default() += 1;
        }
        let max = counts.values().copied().max().unwrap();
        let min = counts.values().copied().min().unwrap();
        assert_eq!(counts.len(), 5);
        assert!(max - min <= 1, "{counts:?}");
    }
}

#[test]
fn success_rates_track_profile_probabilities() {
    let mut tally: HashMap<MissionType, (u32, u32)> = HashMap::new();
    for seed in 0..200 {
        for r in generate_missions(seed) {
            let e = tally.entry(r.mission_type).or_default();
            e.0 += u32::from(r.success);
            e.1 += 1;
        }
    }
    for t in MissionType::ALL {
        let (ok, n) = tally[&t];
        let rate = f64::from(ok) / f64::from(n);
        let want = t.profile().success_prob;
        assert!((rate - want).abs() < 0.05, "{t}: {rate:.3} vs {want}");
    }
}

#[test]
fn dataset_serializes_with_display_names() {
    let records = generate_missions(1);
    let json = serde_json::to_string(&records).unwrap();
    assert!(json.contains("\"Deep Space\""));
    assert!(json.contains("\"ISS Resupply\""));
}

// ---------------------------------------------------------------------------
// Ascent simulation
// ---------------------------------------------------------------------------

#[test]
fn reference_run_reports_twr_and_length() {
    let r = run_ascent_simulation(50_000.0, 800.0, 0.3, 5_000.0, 30_000.0, 200).unwrap();
    assert_eq!(r.twr, 0.96);
    assert_eq!(r.series.len(), 201);
    assert!((139..=140).contains(&r.burnout_time_step()));
}

#[test]
fn empty_tank_stays_on_the_pad() {
    let r = run_ascent_simulation(50_000.0, 800.0, 0.3, 5_000.0, 0.0, 200).unwrap();
    assert_eq!(r.burnout_time_step(), 0);
    assert!(r.series.iter().all(|p| p.altitude == 0.0 && p.velocity == 0.0));
    assert!(detect_events(&r).is_empty());
}

#[test]
fn fuel_load_does_not_move_burnout() {
    let steps = 250;
    let mut last = None;
    for fuel in [5_000.0, 20_000.0, 45_000.0, 90_000.0] {
        let r = run_ascent_simulation(40_000.0, 1_800.0, 0.3, 3_000.0, fuel, steps).unwrap();
        let b = r.burnout_time_step();
        assert!((174..=175).contains(&b), "fuel {fuel}: burnout {b}");
        if let Some(prev) = last {
            assert!(b >= prev || prev - b <= 1);
        }
        last = Some(b);
    }
}

#[test]
fn strong_vehicle_flight_events_in_order() {
    let r = run_ascent_simulation(20_000.0, 2_000.0, 0.3, 2_000.0, 60_000.0, 600).unwrap();
    let kinds: Vec<EventKind> = detect_events(&r).into_iter().map(|e| e.kind).collect();
    assert_eq!(kinds.first(), Some(&EventKind::Liftoff));
    assert!(kinds.contains(&EventKind::Burnout));
    assert!(kinds.contains(&EventKind::Apogee));
}

#[test]
fn rejected_inputs_never_produce_a_series() {
    let bad = [
        LaunchParams { dry_mass_kg: -1.0, ..LaunchParams::default() },
        LaunchParams { thrust_kn: f64::NAN, ..LaunchParams::default() },
        LaunchParams { payload_kg: 0.0, ..LaunchParams::default() },
        LaunchParams { fuel_mass_kg: -10.0, ..LaunchParams::default() },
        LaunchParams { drag_coefficient: -0.1, ..LaunchParams::default() },
    ];
    for p in bad {
        let err = launch_intel::sim::simulate(&p).unwrap_err();
        assert!(err.is_invalid_input(), "{p:?}: {err}");
    }
    let no_steps = LaunchParams { steps: 0, ..LaunchParams::default() };
    let err = launch_intel::sim::simulate(&no_steps).unwrap_err();
    assert!(matches!(err, LaunchError::InvalidSteps(0)));
}
