pub mod atmosphere;

// ---------------------------------------------------------------------------
// Physical constants of the ascent model
// ---------------------------------------------------------------------------

pub const G: f64 = 9.81; // gravitational acceleration, m/s^2
pub const DT: f64 = 1.0; // integration timestep, s
pub const REF_AREA: f64 = 10.0; // cross-sectional area, m^2
pub const RHO0: f64 = 1.225; // sea-level air density, kg/m^3
pub const SCALE_HEIGHT: f64 = 8_500.0; // density scale height, m

/// Fraction of the step horizon over which the propellant is spent.
pub const BURN_FRACTION: f64 = 0.7;
