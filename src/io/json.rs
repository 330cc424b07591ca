use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::sim::{detect_events, FlightEvent, LaunchParams, SimulationResult};

/// Summary statistics of one ascent run.
#[derive(Debug, Clone, Serialize)]
pub struct FlightSummary {
    pub params: LaunchParams,
    pub max_altitude_m: f64,
    pub max_altitude_km: f64,
    pub max_velocity_ms: f64,
    pub burnout_time_step: u32,
    pub twr: f64,
    pub samples: usize,
    pub events: Vec<FlightEvent>,
}

impl FlightSummary {
    pub fn from_result(result: &SimulationResult) -> Self {
        FlightSummary {
            params: result.params,
            max_altitude_m: result.max_altitude,
            max_altitude_km: result.max_altitude_km(),
            max_velocity_ms: result.max_velocity,
            burnout_time_step: result.burnout_time_step(),
            twr: result.twr,
            samples: result.series.len(),
            events: detect_events(result),
        }
    }
}

/// Pretty-print any serializable value as JSON to a writer.
pub fn write_json<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Write a value as JSON to a file.
pub fn write_json_file<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_json(&mut file, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::generate_missions;
    use crate::sim::run_ascent_simulation;

    #[test]
    fn summary_reflects_result() {
        let r = run_ascent_simulation(50_000.0, 800.0, 0.3, 5_000.0, 30_000.0, 200).unwrap();
        let s = FlightSummary::from_result(&r);
        assert_eq!(s.samples, 201);
        assert_eq!(s.twr, 0.96);
        assert_eq!(s.burnout_time_step, r.burnout_time_step());
    }

    #[test]
    fn summary_json_has_fields() {
        let r = run_ascent_simulation(20_000.0, 2_000.0, 0.3, 2_000.0, 60_000.0, 100).unwrap();
        let mut buf = Vec::new();
        write_json(&mut buf, &FlightSummary::from_result(&r)).unwrap();
        let json = String::from_utf8(buf).unwrap();
        assert!(json.contains("\"max_altitude_m\""));
        assert!(json.contains("\"twr\""));
        assert!(json.contains("\"Liftoff\""));
    }

    #[test]
    fn summary_of_deserialized_empty_result() {
        let r = run_ascent_simulation(20_000.0, 2_000.0, 0.3, 2_000.0, 60_000.0, 100).unwrap();
        let mut v = serde_json::to_value(&r).unwrap();
        v["series"] = serde_json::json!([]);
        v["burnout_step"] = serde_json::json!(0);
        let empty: SimulationResult = serde_json::from_value(v).unwrap();
        let s = FlightSummary::from_result(&empty);
        assert_eq!(s.samples, 0);
        assert!(s.events.is_empty());
    }

    #[test]
    fn missions_serialize_as_array() {
        let records = generate_missions(42);
        let mut buf = Vec::new();
        write_json(&mut buf, &records).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v.as_array().map(Vec::len), Some(48));
    }
}
