use launch_intel::analysis::{self, MissionFilter};
use launch_intel::dataset::{MissionCatalog, MissionType, DEFAULT_SEED};
use launch_intel::io::{csv, json};

/// Generate the mission catalog, narrow it to crewed Lunar missions under
/// $300M, and export the selection.
fn main() -> launch_intel::Result<()> {
    let catalog = MissionCatalog::new(DEFAULT_SEED);
    println!("=== Mission Report (seed {}) ===\n", catalog.seed());

    let filter = MissionFilter {
        mission_type: Some(MissionType::Lunar),
        max_cost_million: 300.0,
        ..MissionFilter::default()
    };
    let selection = filter.apply(catalog.records());
    let summary = analysis::FilterSummary::from_selection(&selection);

    println!("Lunar missions under $300M: {}", summary.count);
    println!(
        "Avg payload: {} kg   Success: {}%   Avg fuel: {:.1} t",
        summary.avg_payload_kg, summary.success_rate_pct, summary.avg_fuel_tons
    );
    let (ok, fail) = analysis::cost_by_outcome(&selection);
    println!("Avg cost: success {ok:.1} $M, failure {fail:.1} $M\n");

    for r in &selection {
        println!(
            "  #{:<3} {} {:<9} {:>6.0} kg  crew {}  {}",
            r.id,
            r.launch_date,
            r.vehicle.name(),
            r.payload_kg,
            r.crew_size,
            if r.success { "OK" } else { "FAIL" },
        );
    }

    let dir = std::env::temp_dir();
    let csv_path = dir.join("lunar_missions.csv");
    let mut file = std::fs::File::create(&csv_path)?;
    csv::write_missions(&mut file, selection.iter().copied())?;
    let json_path = dir.join("lunar_missions.json");
    json::write_json_file(&json_path, &selection)?;
    println!("\nWrote {} and {}", csv_path.display(), json_path.display());
    Ok(())
}
