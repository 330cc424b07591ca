use super::{RHO0, SCALE_HEIGHT};

// ---------------------------------------------------------------------------
// Isothermal exponential atmosphere
// ---------------------------------------------------------------------------

/// Air density at a given altitude, kg/m^3.
///
/// rho = rho0 * exp(-h / H). Negative altitudes are NOT clamped: the
/// integrator may briefly sit below ground before the ground clamp kicks
/// in, and the density there is simply larger than at sea level.
pub fn density(altitude_m: f64) -> f64 {
    RHO0 * (-altitude_m / SCALE_HEIGHT).exp()
}

/// Quadratic drag magnitude, N.
///
/// Computed from v^2, so the sign of the velocity is lost. The ascent model
/// always subtracts this from the net upward force, including on descent.
pub fn drag_force(cd: f64, altitude_m: f64, velocity: f64, area: f64) -> f64 {
    0.5 * cd * density(altitude_m) * velocity * velocity * area
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_level_density() {
        assert!((density(0.0) - 1.225).abs() < 1e-12);
    }

    #[test]
    fn one_scale_height_is_e_folded() {
        let rho = density(SCALE_HEIGHT);
        assert!((rho - 1.225 / std::f64::consts::E).abs() < 1e-9);
    }

    #[test]
    fn density_monotonically_decreases() {
        let rho_0 = density(0.0);
        let rho_10k = density(10_000.0);
        let rho_50k = density(50_000.0);
        assert!(rho_0 > rho_10k);
        assert!(rho_10k > rho_50k);
        assert!(rho_50k > 0.0);
    }

    #[test]
    fn below_ground_is_denser() {
        assert!(density(-100.0) > density(0.0));
    }

    #[test]
    fn drag_ignores_velocity_sign() {
        let up = drag_force(0.3, 1000.0, 120.0, 10.0);
        let down = drag_force(0.3, 1000.0, -120.0, 10.0);
        assert!(up > 0.0);
        assert!((up - down).abs() < 1e-12);
    }

    #[test]
    fn no_drag_at_rest() {
        assert_eq!(drag_force(0.3, 0.0, 0.0, 10.0), 0.0);
    }
}
