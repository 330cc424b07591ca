use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::numeric::round_to;
use crate::physics::{atmosphere, DT, G, REF_AREA};
use super::params::LaunchParams;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// One recorded sample, taken before that step's physics update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub step: u32,
    pub altitude: f64,       // m, floored at 0
    pub velocity: f64,       // m/s, floored at 0
    pub remaining_fuel: f64, // kg
    pub mass: f64,           // kg
}

/// Non-fatal conditions worth surfacing to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advisory {
    /// Zero burn rate: thrust never switches on.
    NoPropellant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub params: LaunchParams,
    pub series: Vec<SeriesPoint>,
    pub max_altitude: f64,
    pub max_velocity: f64,
    /// Step at which the tank first ran dry, if it did.
    pub burnout_step: Option<u32>,
    /// Ignition thrust-to-weight, rounded to 2 decimals.
    pub twr: f64,
    pub advisory: Option<Advisory>,
}

impl SimulationResult {
    /// Burnout step with 0 standing in for "never".
    pub fn burnout_time_step(&self) -> u32 {
        self.burnout_step.unwrap_or(0)
    }

    pub fn max_altitude_km(&self) -> f64 {
        self.max_altitude / 1000.0
    }

    pub fn times(&self) -> impl Iterator<Item = u32> + '_ {
        self.series.iter().map(|p| p.step)
    }

    pub fn altitudes(&self) -> impl Iterator<Item = f64> + '_ {
        self.series.iter().map(|p| p.altitude)
    }

    pub fn velocities(&self) -> impl Iterator<Item = f64> + '_ {
        self.series.iter().map(|p| p.velocity)
    }
}

// ---------------------------------------------------------------------------
// Internal integrator state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct AscentState {
    altitude: f64,
    velocity: f64,
    mass: f64,
    fuel: f64,
}

impl AscentState {
    fn sample(&self, step: u32) -> SeriesPoint {
        SeriesPoint {
            step,
            altitude: self.altitude.max(0.0),
            velocity: self.velocity.max(0.0),
            remaining_fuel: self.fuel,
            mass: self.mass,
        }
    }
}

/// Advance one explicit-Euler step. Returns true if the tank ran dry
/// during this step.
fn euler_step(state: &mut AscentState, params: &LaunchParams, burn_rate: f64, step: u32) -> bool {
    // Thrust availability is decided before this step's burn.
    let thrust = if state.fuel > 0.0 { params.thrust_newtons() } else { 0.0 };
    let gravity = state.mass * G;
    let drag =
        atmosphere::drag_force(params.drag_coefficient, state.altitude, state.velocity, REF_AREA);
    let accel = (thrust - gravity - drag) / state.mass;

    state.velocity += accel * DT;
    state.altitude += state.velocity * DT;

    let mut burned_out = false;
    if state.fuel > 0.0 {
        state.fuel -= burn_rate * DT;
        state.mass -= burn_rate * DT;
        if state.fuel <= 0.0 {
            state.fuel = 0.0;
            burned_out = true;
        }
    }

    // Ground clamp; the first two steps are exempt.
    if state.altitude < 0.0 && step > 1 {
        state.altitude = 0.0;
        state.velocity = 0.0;
    }

    burned_out
}

// ---------------------------------------------------------------------------
// Full ascent run
// ---------------------------------------------------------------------------

/// Integrate the vertical ascent for `steps + 1` recorded samples.
///
/// Forces: constant thrust while propellant remains, gravity on the current
/// mass, and quadratic drag in an exponential atmosphere. Drag is always
/// subtracted from the net upward force, even while falling.
pub fn simulate(params: &LaunchParams) -> Result<SimulationResult> {
    params.validate()?;

    let burn_rate = params.fuel_burn_rate();
    let mut state = AscentState {
        altitude: 0.0,
        velocity: 0.0,
        mass: params.total_mass(),
        fuel: params.fuel_mass_kg,
    };

    let mut series = Vec::with_capacity(params.steps as usize + 1);
    let mut max_altitude = 0.0_f64;
    let mut max_velocity = 0.0_f64;
    let mut burnout_step = None;

    for t in 0..=params.steps {
        let point = state.sample(t);
        max_altitude = max_altitude.max(point.altitude);
        max_velocity = max_velocity.max(point.velocity);
        series.push(point);

        if euler_step(&mut state, params, burn_rate, t) && burnout_step.is_none() {
            burnout_step = Some(t);
        }
    }

    let advisory = (burn_rate == 0.0).then_some(Advisory::NoPropellant);

    Ok(SimulationResult {
        params: *params,
        series,
        max_altitude,
        max_velocity,
        burnout_step,
        twr: round_to(params.twr(), 2),
        advisory,
    })
}

/// Positional form of [`simulate`] for shells that collect loose values.
pub fn run_ascent_simulation(
    dry_mass_kg: f64,
    thrust_kn: f64,
    drag_coefficient: f64,
    payload_kg: f64,
    fuel_mass_kg: f64,
    steps: u32,
) -> Result<SimulationResult> {
    simulate(&LaunchParams {
        dry_mass_kg,
        thrust_kn,
        drag_coefficient,
        payload_kg,
        fuel_mass_kg,
        steps,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
