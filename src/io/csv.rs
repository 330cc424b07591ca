use std::io::{self, Write};
use std::path::Path;

use crate::dataset::MissionRecord;
use crate::sim::SimulationResult;

/// Write the ascent series to CSV.
///
/// Columns: step, altitude_m, velocity_ms, remaining_fuel_kg, mass_kg
pub fn write_series<W: Write>(writer: &mut W, result: &SimulationResult) -> io::Result<()> {
    writeln!(writer, "step,altitude_m,velocity_ms,remaining_fuel_kg,mass_kg")?;
    for p in &result.series {
        writeln!(
            writer,
            "{},{:.4},{:.4},{:.4},{:.4}",
            p.step, p.altitude, p.velocity, p.remaining_fuel, p.mass,
        )?;
    }
    Ok(())
}

pub fn write_series_file(path: impl AsRef<Path>, result: &SimulationResult) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_series(&mut file, result)
}

/// Write mission records to CSV, one row per record.
pub fn write_missions<'a, W, I>(writer: &mut W, records: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a MissionRecord>,
{
    writeln!(
        writer,
        "id,mission_type,vehicle,payload_kg,fuel_tons,cost_million,distance_km,\
         duration_days,crew_size,scientific_yield,success,launch_date"
    )?;
    for r in records {
        writeln!(
            writer,
            "{},{},{},{:.0},{:.1},{:.2},{:.0},{:.0},{},{:.1},{},{}",
            r.id,
            r.mission_type,
            r.vehicle,
            r.payload_kg,
            r.fuel_tons,
            r.cost_million,
            r.distance_km,
            r.duration_days,
            r.crew_size,
            r.scientific_yield,
            r.success,
            r.launch_date.format("%Y-%m-%d"),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::generate_missions;
    use crate::sim::run_ascent_simulation;

    #[test]
    fn series_csv_has_header_and_rows() {
        let r = run_ascent_simulation(20_000.0, 1_000.0, 0.3, 1_000.0, 20_000.0, 10).unwrap();
        let mut buf = Vec::new();
        write_series(&mut buf, &r).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("step,"));
        assert_eq!(lines.len(), 12); // header + 11 samples
        assert!(lines[1].starts_with("0,0.0000,0.0000,20000.0000,"));
    }

    #[test]
    fn missions_csv_one_row_per_record() {
        let records = generate_missions(42);
        let mut buf = Vec::new();
        write_missions(&mut buf, &records).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.lines().count(), 49);
        let first = output.lines().nth(1).unwrap();
        assert!(first.starts_with("1,Orbital,"), "got {first}");
        assert_eq!(first.split(',').count(), 12);
    }
}
