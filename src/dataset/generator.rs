use chrono::{Days, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::numeric::round_to;
use super::profile::{MissionType, Span, Vehicle, FUEL_NOISE};

/// Records per generated dataset.
pub const MISSION_COUNT: usize = 48;
/// Launch dates fall within six years of the base date.
pub const LAUNCH_WINDOW_DAYS: u64 = 365 * 6;
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionRecord {
    pub id: u32,
    pub mission_type: MissionType,
    pub vehicle: Vehicle,
    pub payload_kg: f64,
    pub fuel_tons: f64,
    pub cost_million: f64,
    pub distance_km: f64,
    pub duration_days: f64,
    pub crew_size: u32,
    pub scientific_yield: f64,
    pub success: bool,
    pub launch_date: NaiveDate,
}

/// First possible launch date.
pub const BASE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2018, 1, 1) {
    Some(d) => d,
    None => unreachable!(),
};

/// One row of the dataset's field reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDoc {
    pub name: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
}

const fn field(name: &'static str, kind: &'static str, description: &'static str) -> FieldDoc {
    FieldDoc { name, kind, description }
}

/// Field reference for [`MissionRecord`], in serialization order.
pub const SCHEMA: [FieldDoc; 12] = [
    field("id", "integer", "Sequential record number, from 1"),
    field("mission_type", "string", "Orbital, Lunar, Mars, Deep Space, ISS Resupply"),
    field("vehicle", "string", "Launch vehicle designation"),
    field("payload_kg", "number", "Payload mass in kilograms"),
    field("fuel_tons", "number", "Fuel consumption in metric tons"),
    field("cost_million", "number", "Mission cost in millions USD"),
    field("distance_km", "number", "Mission distance in km"),
    field("duration_days", "number", "Mission duration in days"),
    field("crew_size", "integer", "Number of crew members"),
    field("scientific_yield", "number", "Science return score, 10 to 100"),
    field("success", "boolean", "Mission outcome"),
    field("launch_date", "date", "Launch date, YYYY-MM-DD"),
];

/// U[lo, hi) as lo + (hi - lo) * u, so an empty span yields lo.
fn uniform(rng: &mut impl Rng, span: Span) -> f64 {
    span.lo + (span.hi - span.lo) * rng.gen::<f64>()
}

/// Draw one record. The draw order is part of the reproducibility
/// contract: payload, fuel base, fuel noise, launch offset, vehicle, cost,
/// distance, duration, crew, yield, success.
fn draw_record(rng: &mut impl Rng, index: usize) -> MissionRecord {
    let mission_type = MissionType::ALL[index % MissionType::ALL.len()];
    let p = mission_type.profile();

    let payload = uniform(rng, p.payload_kg);
    let fuel_base = uniform(rng, p.fuel_tons);
    let fuel_noise = payload * uniform(rng, FUEL_NOISE);
    let offset = rng.gen_range(0..=LAUNCH_WINDOW_DAYS);
    let vehicle = Vehicle::ALL[rng.gen_range(0..Vehicle::ALL.len())];
    let cost = uniform(rng, p.cost_million);
    let distance = uniform(rng, p.distance_km);
    let duration = uniform(rng, p.duration_days);
    let crew = uniform(rng, p.crew);
    let yield_ = uniform(rng, Span::new(10.0, 100.0));
    let success = rng.gen::<f64>() < p.success_prob;

    MissionRecord {
        id: index as u32 + 1,
        mission_type,
        vehicle,
        payload_kg: payload.round_ties_even(),
        fuel_tons: round_to(fuel_base + fuel_noise, 1),
        cost_million: round_to(cost, 2),
        distance_km: distance.round_ties_even(),
        duration_days: duration.round_ties_even(),
        crew_size: crew.round_ties_even() as u32,
        scientific_yield: round_to(yield_, 1),
        success,
        launch_date: BASE_DATE + Days::new(offset),
    }
}

/// Synthesize the 48-record mission dataset from a single seeded stream.
///
/// Pure in `seed`: the same seed always yields the same records.
pub fn generate_missions(seed: u64) -> Vec<MissionRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..MISSION_COUNT).map(|i| draw_record(&mut rng, i)).collect()
}

// ---------------------------------------------------------------------------
// Catalog: the dataset computed once and shared by reference
// ---------------------------------------------------------------------------

/// Immutable dataset owned by the composition root.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionCatalog {
    seed: u64,
    records: Vec<MissionRecord>,
}

impl MissionCatalog {
    pub fn new(seed: u64) -> Self {
        Self { seed, records: generate_missions(seed) }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn records(&self) -> &[MissionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for MissionCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn same_seed_same_dataset() {
        assert_eq!(generate_missions(42), generate_missions(42));
    }

    #[test]
    fn different_seed_different_dataset() {
        assert_ne!(generate_missions(42), generate_missions(7));
    }

    #[test]
    fn forty_eight_records_with_sequential_ids() {
        let records = generate_missions(42);
        assert_eq!(records.len(), MISSION_COUNT);
        for (i, r) in records.iter().enumerate() {
            assert_eq!(r.id as usize, i + 1);
        }
    }

    #[test]
    fn types_assigned_cyclically() {
        let records = generate_missions(3);
        for (i, r) in records.iter().enumerate() {
            assert_eq!(r.mission_type, MissionType::ALL[i % 5]);
        }
        let mut counts: HashMap<MissionType, usize> = HashMap::new();
        for r in &records {
            *counts.entry(r.mission_type).or_default() += 1;
        }
        // 48 = 5 * 9 + 3: the first three types get the extra record.
        assert_eq!(counts[&MissionType::Orbital], 10);
        assert_eq!(counts[&MissionType::Lunar], 10);
        assert_eq!(counts[&MissionType::Mars], 10);
        assert_eq!(counts[&MissionType::DeepSpace], 9);
        assert_eq!(counts[&MissionType::IssResupply], 9);
    }

    #[test]
    fn fields_within_profile() {
        for seed in [0, 1, 42, 1234, u64::MAX] {
            for r in generate_missions(seed) {
                let p = r.mission_type.profile();
                assert!(p.payload_kg.contains(r.payload_kg), "{r:?}");
                assert!(p.cost_million.contains(r.cost_million), "{r:?}");
                assert!(p.distance_km.contains(r.distance_km), "{r:?}");
                assert!(p.duration_days.contains(r.duration_days), "{r:?}");
                assert!(p.crew.contains(f64::from(r.crew_size)), "{r:?}");
                assert!((10.0..=100.0).contains(&r.scientific_yield), "{r:?}");
                let env = p.fuel_envelope();
                assert!(r.fuel_tons >= env.lo - 0.05 && r.fuel_tons <= env.hi + 0.05, "{r:?}");
            }
        }
    }

    #[test]
    fn rounding_applied() {
        for r in generate_missions(42) {
            assert_eq!(r.payload_kg, r.payload_kg.round());
            assert_eq!(r.distance_km, r.distance_km.round());
            assert_eq!(r.duration_days, r.duration_days.round());
            assert!(((r.fuel_tons * 10.0).round() - r.fuel_tons * 10.0).abs() < 1e-6);
            assert!(((r.cost_million * 100.0).round() - r.cost_million * 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn launch_dates_within_window() {
        let start = BASE_DATE;
        let end = start + Days::new(LAUNCH_WINDOW_DAYS);
        for r in generate_missions(99) {
            assert!(r.launch_date >= start && r.launch_date <= end, "{}", r.launch_date);
        }
    }

    #[test]
    fn deep_space_missions_are_uncrewed() {
        for r in generate_missions(5) {
            if r.mission_type == MissionType::DeepSpace {
                assert_eq!(r.crew_size, 0);
            }
        }
    }

    #[test]
    fn catalog_holds_generated_records() {
        let cat = MissionCatalog::new(42);
        assert_eq!(cat.records(), generate_missions(42).as_slice());
        assert_eq!(cat.seed(), 42);
        assert_eq!(cat.len(), MISSION_COUNT);
        assert!(!cat.is_empty());
        assert_eq!(MissionCatalog::default(), cat);
    }

    #[test]
    fn schema_lists_every_serialized_field() {
        let v = serde_json::to_value(&generate_missions(42)[0]).unwrap();
        let mut keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
        let mut names: Vec<&str> = SCHEMA.iter().map(|f| f.name).collect();
        keys.sort_unstable();
        names.sort_unstable();
        assert_eq!(keys, names);
    }

    #[test]
    fn base_date_is_new_year_2018() {
        assert_eq!(BASE_DATE.to_string(), "2018-01-01");
    }

    #[test]
    fn json_shape() {
        let r = &generate_missions(42)[0];
        let v = serde_json::to_value(r).unwrap();
        assert_eq!(v["mission_type"], "Orbital");
        let date = v["launch_date"].as_str().unwrap();
        assert_eq!(date.len(), 10);
        assert!(date.starts_with("20"));
    }
}
