use nalgebra::{DMatrix, Matrix6};
use serde::Serialize;

use crate::dataset::{MissionRecord, MissionType};
use crate::numeric::{mean, round_to};

// ---------------------------------------------------------------------------
// Pearson correlation across the numeric mission fields
// ---------------------------------------------------------------------------

/// Field labels, in matrix row/column order.
pub const CORRELATION_FIELDS: [&str; 6] =
    ["Payload", "Fuel", "Cost", "Distance", "Duration", "Crew"];

fn field_values(r: &MissionRecord) -> [f64; 6] {
    [
        r.payload_kg,
        r.fuel_tons,
        r.cost_million,
        r.distance_km,
        r.duration_days,
        f64::from(r.crew_size),
    ]
}

/// Pairwise Pearson correlation, rounded to 2 decimals.
///
/// Entries involving a zero-variance column are 0 off the diagonal; the
/// diagonal is always 1.
pub fn correlation_matrix(records: &[MissionRecord]) -> Matrix6<f64> {
    let n = records.len();
    let x = DMatrix::from_fn(n, 6, |i, j| field_values(&records[i])[j]);

    let means: Vec<f64> = (0..6)
        .map(|j| if n > 0 { x.column(j).mean() } else { 0.0 })
        .collect();
    let centered = DMatrix::from_fn(n, 6, |i, j| x[(i, j)] - means[j]);
    let cov = centered.transpose() * &centered;

    Matrix6::from_fn(|i, j| {
        if i == j {
            return 1.0;
        }
        let (a, b) = (i.min(j), i.max(j));
        let denom = (cov[(a, a)] * cov[(b, b)]).sqrt();
        if denom > 0.0 {
            round_to(cov[(a, b)] / denom, 2)
        } else {
            0.0
        }
    })
}

// ---------------------------------------------------------------------------
// Per-type aggregates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TypeAverages {
    pub mission_type: MissionType,
    pub count: usize,
    pub avg_payload_kg: u64, // truncated
    pub avg_fuel_tons: f64,  // 1 decimal
    pub success_rate: f64,   // 0..1
}

/// One row per mission type in canonical order.
pub fn averages_by_type(records: &[MissionRecord]) -> Vec<TypeAverages> {
    MissionType::ALL
        .into_iter()
        .map(|t| {
            let group: Vec<&MissionRecord> =
                records.iter().filter(|r| r.mission_type == t).collect();
            TypeAverages {
                mission_type: t,
                count: group.len(),
                avg_payload_kg: mean(group.iter().map(|r| r.payload_kg)).unwrap_or(0.0) as u64,
                avg_fuel_tons: round_to(mean(group.iter().map(|r| r.fuel_tons)).unwrap_or(0.0), 1),
                success_rate: mean(group.iter().map(|r| if r.success { 1.0 } else { 0.0 }))
                    .unwrap_or(0.0),
            }
        })
        .collect()
}
