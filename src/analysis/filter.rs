use serde::Serialize;

use crate::dataset::{MissionRecord, MissionType, Vehicle};
use crate::numeric::{mean, round_to};

// ---------------------------------------------------------------------------
// Mission filter (conjunctive predicates, inclusive bounds)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissionFilter {
    pub mission_type: Option<MissionType>, // None = all
    pub vehicle: Option<Vehicle>,          // None = all
    pub max_cost_million: f64,
    pub max_distance_km: f64,
}

impl Default for MissionFilter {
    fn default() -> Self {
        Self {
            mission_type: None,
            vehicle: None,
            max_cost_million: 500.0,
            max_distance_km: 500_000.0,
        }
    }
}

impl MissionFilter {
    pub fn matches(&self, r: &MissionRecord) -> bool {
        self.mission_type.map_or(true, |t| r.mission_type == t)
            && self.vehicle.map_or(true, |v| r.vehicle == v)
            && r.cost_million <= self.max_cost_million
            && r.distance_km <= self.max_distance_km
    }

    /// Matching records in their original order.
    pub fn apply<'a>(&self, records: &'a [MissionRecord]) -> Vec<&'a MissionRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

// ---------------------------------------------------------------------------
// KPIs over a selection
// ---------------------------------------------------------------------------

/// Headline numbers shown above the Mission Data charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilterSummary {
    pub count: usize,
    pub avg_payload_kg: u64,   // truncated
    pub success_rate_pct: u32, // truncated
    pub avg_fuel_tons: f64,    // 1 decimal
}

impl FilterSummary {
    /// All-zero summary for an empty selection.
    pub fn from_selection(selection: &[&MissionRecord]) -> Self {
        let payload = mean(selection.iter().map(|r| r.payload_kg)).unwrap_or(0.0);
        let success =
            mean(selection.iter().map(|r| if r.success { 1.0 } else { 0.0 })).unwrap_or(0.0);
        let fuel = mean(selection.iter().map(|r| r.fuel_tons)).unwrap_or(0.0);
        Self {
            count: selection.len(),
            avg_payload_kg: payload as u64,
            success_rate_pct: (success * 100.0) as u32,
            avg_fuel_tons: round_to(fuel, 1),
        }
    }
}

/// Mean cost of successful and failed missions; 0 for an empty group.
pub fn cost_by_outcome(selection: &[&MissionRecord]) -> (f64, f64) {
    let avg = |want: bool| {
        mean(selection.iter().filter(|r| r.success == want).map(|r| r.cost_million)).unwrap_or(0.0)
    };
    (avg(true), avg(false))
}

/// Average crew per mission type, split by outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrewByOutcome {
    pub mission_type: MissionType,
    pub success_avg: f64,
    pub failure_avg: f64,
}

/// One row per type in canonical order; empty groups report 0.
pub fn crew_by_type_and_outcome(selection: &[&MissionRecord]) -> Vec<CrewByOutcome> {
    MissionType::ALL
        .into_iter()
        .map(|t| {
            let avg = |want: bool| {
                mean(
                    selection
                        .iter()
                        .filter(|r| r.mission_type == t && r.success == want)
                        .map(|r| f64::from(r.crew_size)),
                )
                .unwrap_or(0.0)
            };
            CrewByOutcome { mission_type: t, success_avg: avg(true), failure_avg: avg(false) }
        })
        .collect()
}

/// (distance_km, duration_days) pairs sorted by distance.
pub fn duration_vs_distance(selection: &[&MissionRecord]) -> Vec<(f64, f64)> {
    let mut pts: Vec<(f64, f64)> =
        selection.iter().map(|r| (r.distance_km, r.duration_days)).collect();
    pts.sort_by(|a, b| a.0.total_cmp(&b.0));
    pts
}

/// (cost_million, scientific_yield, mission_type) per record, in selection
/// order, for the yield-vs-cost scatter coloured by type.
pub fn yield_vs_cost(selection: &[&MissionRecord]) -> Vec<(f64, f64, MissionType)> {
    selection.iter().map(|r| (r.cost_million, r.scientific_yield, r.mission_type)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::generate_missions;
    use chrono::NaiveDate;

    fn record(
        id: u32,
        t: MissionType,
        v: Vehicle,
        cost: f64,
        crew: u32,
        success: bool,
    ) -> MissionRecord {
        MissionRecord {
            id,
            mission_type: t,
            vehicle: v,
            payload_kg: 1_000.0 * f64::from(id),
            fuel_tons: 10.0 * f64::from(id),
            cost_million: cost,
            distance_km: 1_000.0 * f64::from(10 - id),
            duration_days: f64::from(id),
            crew_size: crew,
            scientific_yield: 50.0,
            success,
            launch_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        }
    }

    fn sample() -> Vec<MissionRecord> {
        vec![
            record(1, MissionType::Orbital, Vehicle::Falcon9, 50.0, 2, true),
            record(2, MissionType::Orbital, Vehicle::Soyuz, 100.0, 4, false),
            record(3, MissionType::Lunar, Vehicle::Falcon9, 200.0, 6, true),
        ]
    }

    #[test]
    fn default_filter_keeps_full_dataset() {
        let records = generate_missions(42);
        assert_eq!(MissionFilter::default().apply(&records).len(), records.len());
    }

    #[test]
    fn predicates_are_conjunctive_and_inclusive() {
        let records = sample();
        let f = MissionFilter {
            vehicle: Some(Vehicle::Falcon9),
            max_cost_million: 200.0,
            ..MissionFilter::default()
        };
        let ids: Vec<u32> = f.apply(&records).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let f = MissionFilter {
            mission_type: Some(MissionType::Orbital),
            max_cost_million: 99.99,
            ..f
        };
        let ids: Vec<u32> = f.apply(&records).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn summary_truncates() {
        let records = sample();
        let sel: Vec<&MissionRecord> = records.iter().collect();
        let s = FilterSummary::from_selection(&sel);
        assert_eq!(s.count, 3);
        assert_eq!(s.avg_payload_kg, 2_000);
        assert_eq!(s.success_rate_pct, 66);
        assert_eq!(s.avg_fuel_tons, 20.0);
    }

    #[test]
    fn empty_selection_is_all_zero() {
        let s = FilterSummary::from_selection(&[]);
        assert_eq!(
            s,
            FilterSummary { count: 0, avg_payload_kg: 0, success_rate_pct: 0, avg_fuel_tons: 0.0 }
        );
        assert_eq!(cost_by_outcome(&[]), (0.0, 0.0));
        assert!(crew_by_type_and_outcome(&[])
            .iter()
            .all(|c| c.success_avg == 0.0 && c.failure_avg == 0.0));
    }

    #[test]
    fn cost_and_crew_split_by_outcome() {
        let records = sample();
        let sel: Vec<&MissionRecord> = records.iter().collect();
        assert_eq!(cost_by_outcome(&sel), (125.0, 100.0));

        let crew = crew_by_type_and_outcome(&sel);
        assert_eq!(crew.len(), 5);
        assert_eq!(
            crew[0],
            CrewByOutcome { mission_type: MissionType::Orbital, success_avg: 2.0, failure_avg: 4.0 }
        );
        assert_eq!(crew[1].success_avg, 6.0);
        assert_eq!(crew[1].failure_avg, 0.0);
    }

    #[test]
    fn duration_series_sorted_by_distance() {
        let records = sample();
        let sel: Vec<&MissionRecord> = records.iter().collect();
        let pts = duration_vs_distance(&sel);
        assert_eq!(pts, vec![(7_000.0, 3.0), (8_000.0, 2.0), (9_000.0, 1.0)]);
    }

    #[test]
    fn yield_points_follow_selection() {
        let mut records = sample();
        records[2].scientific_yield = 87.5;
        let sel: Vec<&MissionRecord> = records.iter().collect();
        assert_eq!(
            yield_vs_cost(&sel),
            vec![
                (50.0, 50.0, MissionType::Orbital),
                (100.0, 50.0, MissionType::Orbital),
                (200.0, 87.5, MissionType::Lunar),
            ]
        );
        assert!(yield_vs_cost(&[]).is_empty());
    }
}
