use launch_intel::sim::{self, LaunchParamsBuilder};

/// Sweep propellant load and thrust and tabulate peak altitude, showing
/// where extra fuel stops paying for its own weight.
fn main() -> launch_intel::Result<()> {
    println!("=== Ascent Sweep: fuel vs thrust ===\n");

    let thrusts = [600.0, 800.0, 1_200.0, 2_000.0];
    let fuels = [0.0, 20_000.0, 40_000.0, 60_000.0, 80_000.0];

    print!("{:>12}", "fuel \\ kN");
    for t in thrusts {
        print!("{t:>12.0}");
    }
    println!();

    for fuel in fuels {
        print!("{fuel:>12.0}");
        for thrust in thrusts {
            let params =
                LaunchParamsBuilder::new().thrust_kn(thrust).fuel(fuel).steps(300).build()?;
            let r = sim::simulate(&params)?;
            print!("{:>10.1}km", r.max_altitude_km());
        }
        println!();
    }
    println!();

    // Burnout lands at ~70% of the run regardless of load.
    let params = LaunchParamsBuilder::new().thrust_kn(2_000.0).fuel(60_000.0).build()?;
    let r = sim::simulate(&params)?;
    println!("Burnout at t={}s of {} (TWR {:.2})", r.burnout_time_step(), params.steps, r.twr);
    for e in sim::detect_events(&r) {
        println!(
            "  {:<10} t={:>4}s  alt={:>9.0} m",
            e.kind.label(),
            e.point.step,
            e.point.altitude
        );
    }
    Ok(())
}
