use serde::Serialize;

use super::runner::{SeriesPoint, SimulationResult};

// ---------------------------------------------------------------------------
// Flight events
// ---------------------------------------------------------------------------

/// Kinds of flight events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventKind {
    Liftoff,
    Burnout,
    Apogee,
    Touchdown,
}

impl EventKind {
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Liftoff => "LIFTOFF",
            EventKind::Burnout => "BURNOUT",
            EventKind::Apogee => "APOGEE",
            EventKind::Touchdown => "TOUCHDOWN",
        }
    }
}

/// A discrete event and the sample it was observed at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightEvent {
    pub kind: EventKind,
    pub point: SeriesPoint,
}

/// Passive detectors inspect consecutive samples and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &SeriesPoint, current: &SeriesPoint) -> Option<EventKind>;
}

/// First sample off the pad.
#[derive(Default)]
pub struct LiftoffDetector {
    fired: bool,
}

impl EventDetector for LiftoffDetector {
    fn check(&mut self, prev: &SeriesPoint, current: &SeriesPoint) -> Option<EventKind> {
        if !self.fired && prev.altitude <= 0.0 && current.altitude > 0.0 {
            self.fired = true;
            Some(EventKind::Liftoff)
        } else {
            None
        }
    }
}

/// Sample where the displayed altitude returns to zero after a flight.
#[derive(Default)]
pub struct TouchdownDetector {
    fired: bool,
}

impl EventDetector for TouchdownDetector {
    fn check(&mut self, prev: &SeriesPoint, current: &SeriesPoint) -> Option<EventKind> {
        if !self.fired && prev.altitude > 0.0 && current.altitude <= 0.0 {
            self.fired = true;
            Some(EventKind::Touchdown)
        } else {
            None
        }
    }
}

/// Collect liftoff, burnout, apogee and touchdown in step order.
///
/// Burnout and apogee come from the result's summaries rather than a
/// detector: burnout is recorded by the integrator, and apogee is the
/// first sample at the maximum altitude.
pub fn detect_events(result: &SimulationResult) -> Vec<FlightEvent> {
    let series = &result.series;
    let mut events = Vec::new();

    let mut detectors: Vec<Box<dyn EventDetector>> = vec![
        Box::new(LiftoffDetector::default()),
        Box::new(TouchdownDetector::default()),
    ];
    for pair in series.windows(2) {
        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(&pair[0], &pair[1]) {
                events.push(FlightEvent { kind, point: pair[1] });
            }
        }
    }

    if let Some(step) = result.burnout_step {
        // The tank runs dry during `step`; the next sample shows it empty.
        if let Some(p) = series.get(step as usize + 1).or_else(|| series.last()) {
            events.push(FlightEvent { kind: EventKind::Burnout, point: *p });
        }
    }

    if result.max_altitude > 0.0 {
        if let Some(p) = series.iter().find(|p| p.altitude == result.max_altitude) {
            events.push(FlightEvent { kind: EventKind::Apogee, point: *p });
        }
    }

    events.sort_by_key(|e| e.point.step);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::runner::run_ascent_simulation;

    fn point(step: u32, altitude: f64) -> SeriesPoint {
        SeriesPoint { step, altitude, velocity: 0.0, remaining_fuel: 0.0, mass: 1.0 }
    }

    #[test]
    fn liftoff_detected_once() {
        let mut det = LiftoffDetector::default();
        assert_eq!(det.check(&point(0, 0.0), &point(1, 5.0)), Some(EventKind::Liftoff));
        assert!(det.check(&point(4, 0.0), &point(5, 5.0)).is_none());
    }

    #[test]
    fn touchdown_detected() {
        let mut det = TouchdownDetector::default();
        assert!(det.check(&point(0, 0.0), &point(1, 0.0)).is_none());
        assert_eq!(det.check(&point(9, 3.0), &point(10, 0.0)), Some(EventKind::Touchdown));
    }

    #[test]
    fn full_flight_events_in_order() {
        // Short burn, long horizon: climbs, coasts, falls back.
        let r = run_ascent_simulation(5_000.0, 400.0, 0.3, 1_000.0, 10_000.0, 400).unwrap();
        let events = detect_events(&r);
        let kinds: Vec<EventKind> = events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds.first(), Some(&EventKind::Liftoff));
        assert!(kinds.contains(&EventKind::Burnout));
        assert!(kinds.contains(&EventKind::Apogee));
        for w in events.windows(2) {
            assert!(w[0].point.step <= w[1].point.step);
        }
    }

    #[test]
    fn empty_series_yields_no_events() {
        let mut r = run_ascent_simulation(20_000.0, 2_000.0, 0.3, 2_000.0, 60_000.0, 100).unwrap();
        r.series.clear();
        r.burnout_step = Some(0);
        assert!(detect_events(&r).is_empty());
    }

    #[test]
    fn burnout_past_the_end_falls_back_to_last_sample() {
        let mut r = run_ascent_simulation(20_000.0, 2_000.0, 0.3, 2_000.0, 60_000.0, 100).unwrap();
        r.burnout_step = Some(10_000);
        let burnout = detect_events(&r).into_iter().find(|e| e.kind == EventKind::Burnout).unwrap();
        assert_eq!(burnout.point.step, 100);
    }

    #[test]
    fn grounded_run_has_no_flight_events() {
        let r = run_ascent_simulation(50_000.0, 800.0, 0.3, 5_000.0, 0.0, 100).unwrap();
        assert!(detect_events(&r).is_empty());
    }
}
