use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use launch_intel::analysis::{self, MissionFilter, CORRELATION_FIELDS};
use launch_intel::dataset::{MissionCatalog, MissionType, Vehicle, DEFAULT_SEED};
use launch_intel::io::{csv, json};
use launch_intel::sim::{self, Advisory, LaunchParams};

#[derive(Parser)]
#[command(name = "launch-intel")]
#[command(about = "Launch mission analytics and 1-D ascent simulator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the ascent simulation and print the flight report
    Simulate(SimulateArgs),
    /// List the synthetic mission dataset, optionally filtered
    Missions(MissionsArgs),
    /// Correlations and per-type averages over the full dataset
    Insights {
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
}

#[derive(Args)]
struct SimulateArgs {
    #[arg(long, default_value_t = 50_000.0)]
    dry_mass: f64,

    /// Thrust, kN
    #[arg(long, default_value_t = 800.0)]
    thrust: f64,

    #[arg(long, default_value_t = 0.30)]
    drag: f64,

    #[arg(long, default_value_t = 5_000.0)]
    payload: f64,

    #[arg(long, default_value_t = 30_000.0)]
    fuel: f64,

    #[arg(long, default_value_t = 200)]
    steps: u32,

    /// Write the full series as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the flight summary as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

impl Default for SimulateArgs {
    fn default() -> Self {
        let p = LaunchParams::default();
        Self {
            dry_mass: p.dry_mass_kg,
            thrust: p.thrust_kn,
            drag: p.drag_coefficient,
            payload: p.payload_kg,
            fuel: p.fuel_mass_kg,
            steps: p.steps,
            csv: None,
            json: None,
        }
    }
}

#[derive(Args)]
struct MissionsArgs {
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Mission type, e.g. "deep-space"
    #[arg(long = "type")]
    mission_type: Option<MissionType>,

    /// Launch vehicle, e.g. "falcon-9"
    #[arg(long)]
    vehicle: Option<Vehicle>,

    #[arg(long, default_value_t = 500.0)]
    max_cost: f64,

    #[arg(long, default_value_t = 500_000.0)]
    max_distance: f64,

    /// Write the filtered records as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the filtered records as CSV
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Simulate(args)) => run_simulate(args),
        Some(Commands::Missions(args)) => run_missions(args),
        Some(Commands::Insights { seed }) => run_insights(seed),
        None => run_simulate(SimulateArgs::default()),
    }
}

const RULE: &str = "  ──────────────────────────────────────────────────────────────────";
const BANNER: &str = "====================================================================";

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

fn run_simulate(args: SimulateArgs) -> Result<()> {
    let params = LaunchParams {
        dry_mass_kg: args.dry_mass,
        thrust_kn: args.thrust,
        drag_coefficient: args.drag,
        payload_kg: args.payload,
        fuel_mass_kg: args.fuel,
        steps: args.steps,
    };
    debug!(?params, "running ascent simulation");

    let result = sim::simulate(&params).context("simulation rejected its inputs")?;
    if result.advisory == Some(Advisory::NoPropellant) {
        warn!("no propellant loaded: thrust stays off for the entire run");
    }
    info!(
        max_alt_km = result.max_altitude_km(),
        burnout = result.burnout_time_step(),
        "simulation complete"
    );

    println!();
    println!("{BANNER}");
    println!("  ASCENT SIMULATION");
    println!("{BANNER}");
    println!();
    println!("  Launch Parameters");
    println!("{RULE}");
    println!(
        "  Dry mass:      {:>10.0} kg    Payload:      {:>10.0} kg",
        params.dry_mass_kg, params.payload_kg
    );
    println!(
        "  Fuel:          {:>10.0} kg    Total mass:   {:>10.0} kg",
        params.fuel_mass_kg,
        params.total_mass()
    );
    println!(
        "  Thrust:        {:>10.0} kN    TWR:          {:>10.2}",
        params.thrust_kn, result.twr
    );
    println!(
        "  Cd:            {:>10.3}       Steps:        {:>10}",
        params.drag_coefficient, params.steps
    );
    println!();

    let events = sim::detect_events(&result);
    println!("  Flight Events");
    println!("{RULE}");
    if events.is_empty() {
        println!("  (none: vehicle never left the pad)");
    }
    for e in &events {
        println!(
            "  {:<10} t={:>5}s   alt={:>10.0}m   vel={:>8.1}m/s   fuel={:>9.0}kg",
            e.kind.label(),
            e.point.step,
            e.point.altitude,
            e.point.velocity,
            e.point.remaining_fuel,
        );
    }
    println!();

    println!("  Performance Summary");
    println!("{RULE}");
    println!(
        "  Max altitude:  {:>10.0} m   ({:.1} km)",
        result.max_altitude,
        result.max_altitude_km()
    );
    println!("  Max velocity:  {:>10.0} m/s", result.max_velocity);
    println!("  Fuel burnout:  {:>10} s", result.burnout_time_step());
    println!();

    println!("  Trajectory");
    println!("{RULE}");
    println!(
        "  {:>6}  {:>11}  {:>10}  {:>10}  {:>6}",
        "t (s)", "alt (m)", "vel (m/s)", "fuel (kg)", "phase"
    );
    println!("  {}", "─".repeat(52));
    let sample_interval = (result.series.len() / 30).max(1);
    let last = result.series.len() - 1;
    for (i, p) in result.series.iter().enumerate() {
        if i % sample_interval != 0 && i != last {
            continue;
        }
        let phase = if p.remaining_fuel > 0.0 {
            "BURN"
        } else if p.altitude <= 0.0 {
            "GROUND"
        } else if p.velocity > 0.0 {
            "COAST"
        } else {
            "DESC"
        };
        println!(
            "  {:>6}  {:>11.1}  {:>10.1}  {:>10.0}  {:>6}",
            p.step, p.altitude, p.velocity, p.remaining_fuel, phase
        );
    }
    println!("{BANNER}");
    println!();

    if let Some(path) = &args.csv {
        csv::write_series_file(path, &result)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "series exported");
    }
    if let Some(path) = &args.json {
        json::write_json_file(path, &json::FlightSummary::from_result(&result))
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "summary exported");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// missions
// ---------------------------------------------------------------------------

fn run_missions(args: MissionsArgs) -> Result<()> {
    let catalog = MissionCatalog::new(args.seed);
    info!(seed = catalog.seed(), records = catalog.len(), "dataset generated");

    let filter = MissionFilter {
        mission_type: args.mission_type,
        vehicle: args.vehicle,
        max_cost_million: args.max_cost,
        max_distance_km: args.max_distance,
    };
    let selection = filter.apply(catalog.records());
    let summary = analysis::FilterSummary::from_selection(&selection);

    println!();
    println!(
        "  {:>3}  {:<13} {:<9} {:>8} {:>7} {:>8} {:>9} {:>5} {:>4} {:>6} {:<4} {}",
        "id",
        "type",
        "vehicle",
        "payload",
        "fuel t",
        "cost $M",
        "dist km",
        "days",
        "crew",
        "yield",
        "ok",
        "date"
    );
    println!("  {}", "─".repeat(100));
    for r in &selection {
        println!(
            "  {:>3}  {:<13} {:<9} {:>8.0} {:>7.1} {:>8.2} {:>9.0} {:>5.0} {:>4} {:>6.1} {:<4} {}",
            r.id,
            r.mission_type.name(),
            r.vehicle.name(),
            r.payload_kg,
            r.fuel_tons,
            r.cost_million,
            r.distance_km,
            r.duration_days,
            r.crew_size,
            r.scientific_yield,
            if r.success { "yes" } else { "no" },
            r.launch_date,
        );
    }
    println!();

    if selection.is_empty() {
        warn!("no missions match the current filters");
    }
    println!(
        "  Filtered: {}   Avg payload: {} kg   Success: {}%   Avg fuel: {:.1} t",
        summary.count, summary.avg_payload_kg, summary.success_rate_pct, summary.avg_fuel_tons
    );
    let (cost_ok, cost_fail) = analysis::cost_by_outcome(&selection);
    println!("  Avg cost: success {cost_ok:.1} $M   failure {cost_fail:.1} $M");
    println!();

    if let Some(path) = &args.json {
        json::write_json_file(path, &selection)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "missions exported");
    }
    if let Some(path) = &args.csv {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        csv::write_missions(&mut file, selection.iter().copied())?;
        info!(path = %path.display(), "missions exported");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// insights
// ---------------------------------------------------------------------------

fn run_insights(seed: u64) -> Result<()> {
    let catalog = MissionCatalog::new(seed);
    info!(seed, records = catalog.len(), "dataset generated");

    let corr = analysis::correlation_matrix(catalog.records());
    println!();
    println!("  Correlation Matrix");
    println!("{RULE}");
    print!("  {:<9}", "");
    for f in CORRELATION_FIELDS {
        print!("{f:>9}");
    }
    println!();
    for (i, row) in CORRELATION_FIELDS.iter().enumerate() {
        print!("  {row:<9}");
        for j in 0..CORRELATION_FIELDS.len() {
            print!("{:>9.2}", corr[(i, j)]);
        }
        println!();
    }
    println!();

    println!("  By Mission Type");
    println!("{RULE}");
    println!("  {:<13} {:>5} {:>12} {:>10} {:>9}", "type", "n", "payload kg", "fuel t", "success");
    for a in analysis::averages_by_type(catalog.records()) {
        println!(
            "  {:<13} {:>5} {:>12} {:>10.1} {:>8.0}%",
            a.mission_type.name(),
            a.count,
            a.avg_payload_kg,
            a.avg_fuel_tons,
            a.success_rate * 100.0
        );
    }
    println!();

    println!("  Profile Ranges");
    println!("{RULE}");
    println!(
        "  {:<13} {:>17} {:>15} {:>9} {:>9}",
        "type", "payload kg", "fuel t", "p(ok)", "in range"
    );
    for t in MissionType::ALL {
        let p = t.profile();
        let fuel = p.fuel_envelope();
        let group: Vec<_> = catalog.records().iter().filter(|r| r.mission_type == t).collect();
        let inside = group
            .iter()
            .filter(|r| p.payload_kg.contains(r.payload_kg) && fuel.contains(r.fuel_tons))
            .count();
        println!(
            "  {:<13} {:>8.0}-{:<8.0} {:>7.1}-{:<7.1} {:>9.2} {:>5}/{:<3}",
            t.name(),
            p.payload_kg.lo,
            p.payload_kg.hi,
            fuel.lo,
            fuel.hi,
            p.success_prob,
            inside,
            group.len()
        );
    }
    println!();
    Ok(())
}
