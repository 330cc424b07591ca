use serde::{Deserialize, Serialize};

use crate::error::{LaunchError, Result};
use crate::physics::{BURN_FRACTION, G};

// ---------------------------------------------------------------------------
// Launch parameters (the six slider inputs)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchParams {
    pub dry_mass_kg: f64,
    pub thrust_kn: f64,
    pub drag_coefficient: f64,
    pub payload_kg: f64,
    pub fuel_mass_kg: f64,
    pub steps: u32,
}

impl Default for LaunchParams {
    fn default() -> Self {
        Self {
            dry_mass_kg: 50_000.0,
            thrust_kn: 800.0,
            drag_coefficient: 0.30,
            payload_kg: 5_000.0,
            fuel_mass_kg: 30_000.0,
            steps: 200,
        }
    }
}

impl LaunchParams {
    /// Reject inputs outside the model's domain before any computation.
    ///
    /// Masses and thrust must be strictly positive, drag non-negative,
    /// and everything finite. Zero propellant is allowed: it is the
    /// degenerate no-thrust run, not an error.
    pub fn validate(&self) -> Result<()> {
        positive("dry_mass_kg", self.dry_mass_kg)?;
        positive("thrust_kn", self.thrust_kn)?;
        positive("payload_kg", self.payload_kg)?;
        non_negative("drag_coefficient", self.drag_coefficient)?;
        non_negative("fuel_mass_kg", self.fuel_mass_kg)?;
        if self.steps < 1 {
            return Err(LaunchError::InvalidSteps(self.steps));
        }
        Ok(())
    }

    pub fn thrust_newtons(&self) -> f64 {
        self.thrust_kn * 1000.0
    }

    /// Wet mass at ignition.
    pub fn total_mass(&self) -> f64 {
        self.dry_mass_kg + self.payload_kg + self.fuel_mass_kg
    }

    /// Propellant spent per second; exhausts the tank at 70% of the horizon.
    pub fn fuel_burn_rate(&self) -> f64 {
        self.fuel_mass_kg / (f64::from(self.steps) * BURN_FRACTION)
    }

    /// Thrust-to-weight ratio at ignition, unrounded.
    pub fn twr(&self) -> f64 {
        self.thrust_newtons() / (self.total_mass() * G)
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(LaunchError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(LaunchError::invalid(name, value, "must be > 0"));
    }
    Ok(())
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(LaunchError::invalid(name, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(LaunchError::invalid(name, value, "must be >= 0"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

pub struct LaunchParamsBuilder {
    params: LaunchParams,
}

impl LaunchParamsBuilder {
    pub fn new() -> Self {
        Self { params: LaunchParams::default() }
    }

    pub fn dry_mass(mut self, v: f64) -> Self {
        self.params.dry_mass_kg = v;
        self
    }

    pub fn thrust_kn(mut self, v: f64) -> Self {
        self.params.thrust_kn = v;
        self
    }

    pub fn drag(mut self, v: f64) -> Self {
        self.params.drag_coefficient = v;
        self
    }

    pub fn payload(mut self, v: f64) -> Self {
        self.params.payload_kg = v;
        self
    }

    pub fn fuel(mut self, v: f64) -> Self {
        self.params.fuel_mass_kg = v;
        self
    }

    pub fn steps(mut self, v: u32) -> Self {
        self.params.steps = v;
        self
    }

    /// Validate and return the parameter set.
    pub fn build(self) -> Result<LaunchParams> {
        self.params.validate()?;
        Ok(self.params)
    }
}

impl Default for LaunchParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Dashboard slider ranges
// ---------------------------------------------------------------------------

/// One UI slider. The core accepts values outside these bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

pub const DRY_MASS_SLIDER: ParamRange = ParamRange {
    label: "Initial Mass (kg)",
    min: 5_000.0,
    max: 200_000.0,
    default: 50_000.0,
    step: 1_000.0,
};
pub const THRUST_SLIDER: ParamRange = ParamRange {
    label: "Thrust (kN)",
    min: 100.0,
    max: 5_000.0,
    default: 800.0,
    step: 50.0,
};
pub const DRAG_SLIDER: ParamRange = ParamRange {
    label: "Drag Coefficient",
    min: 0.05,
    max: 1.0,
    default: 0.30,
    step: 0.01,
};
pub const PAYLOAD_SLIDER: ParamRange = ParamRange {
    label: "Payload (kg)",
    min: 100.0,
    max: 50_000.0,
    default: 5_000.0,
    step: 100.0,
};
pub const FUEL_SLIDER: ParamRange = ParamRange {
    label: "Fuel (kg)",
    min: 1_000.0,
    max: 150_000.0,
    default: 30_000.0,
    step: 500.0,
};
pub const STEPS_SLIDER: ParamRange = ParamRange {
    label: "Time Steps",
    min: 50.0,
    max: 500.0,
    default: 200.0,
    step: 10.0,
};

/// All sliders in dashboard order, matching [`LaunchParams::from_slider_values`].
pub const SLIDERS: [ParamRange; 6] = [
    DRY_MASS_SLIDER,
    THRUST_SLIDER,
    DRAG_SLIDER,
    PAYLOAD_SLIDER,
    FUEL_SLIDER,
    STEPS_SLIDER,
];

impl ParamRange {
    /// Clamp to the slider bounds and snap to the nearest step.
    pub fn snap(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        let n = ((clamped - self.min) / self.step).round();
        (self.min + n * self.step).min(self.max)
    }
}

impl LaunchParams {
    /// Build from raw slider positions in [`SLIDERS`] order. Each value is
    /// snapped to its slider first, so the result is always in UI range.
    pub fn from_slider_values(values: [f64; 6]) -> Self {
        let [dry, thrust, drag, payload, fuel, steps]: [f64; 6] =
            std::array::from_fn(|i| SLIDERS[i].snap(values[i]));
        Self {
            dry_mass_kg: dry,
            thrust_kn: thrust,
            drag_coefficient: drag,
            payload_kg: payload,
            fuel_mass_kg: fuel,
            steps: steps.round() as u32,
        }
    }
}

/// Slider positions at their defaults.
pub fn slider_defaults() -> [f64; 6] {
    SLIDERS.map(|r| r.default)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
