//! # Wind Uplift Formulas for Rigid Roof Tiles
//!
//! Velocity pressure, tile geometry, and the aerodynamic uplift moment.
//!
//! ## Notation
//!
//! - `Vult` = Ultimate design wind speed (mph)
//! - `Kz`   = Velocity pressure exposure coefficient
//! - `Kzt`  = Topographic factor (1.0 here)
//! - `Kd`   = Wind directionality factor
//! - `qh`   = Velocity pressure at mean roof height (psf)
//! - `GCp`  = External pressure coefficient (negative = suction)
//! - `CL`   = Lift coefficient of the tile profile
//! - `b`    = Exposed tile width (ft)
//! - `L`    = Tile length (ft)
//! - `La`   = Moment arm from the axis of rotation to the point of uplift (ft)
//! - `Ma`   = Aerodynamic uplift moment (ft-lbf)
//!
//! ## Sign Conventions
//!
//! - GCp: Negative for suction (away from the roof surface)
//! - Ma: Reported as a magnitude
//!
//! ## References
//!
//! - ASCE 7-22 Eq. 26.10-1 (velocity pressure)
//! - FBC 2023 Section 1609.6.3, Eq. 16-18 (rigid tile uplift moment)

use crate::units::{Feet, FtLbf, Inches, Mph, Psf};

/// Velocity pressure constant for US customary units (ASCE 7-22 Eq. 26.10-1)
pub const VELOCITY_PRESSURE_CONSTANT: f64 = 0.00256;

/// Topographic factor; flat terrain only
pub const KZT: f64 = 1.0;

/// Point of uplift measured from the head of the tile, as a fraction of L
/// (FBC 1609.6.3)
pub const MOMENT_ARM_RATIO: f64 = 0.76;

// =============================================================================
// VELOCITY PRESSURE
// =============================================================================

/// Velocity pressure at mean roof height
///
/// # Formula (ASCE 7-22 Eq. 26.10-1)
/// qh = 0.00256 · Kz · Kzt · Kd · Vult²
///
/// # Example
/// ```rust
/// use uplift_core::equations::wind::velocity_pressure;
/// use uplift_core::units::Mph;
///
/// let qh = velocity_pressure(0.98, 1.0, 0.85, Mph(175.0));
/// assert!((qh.0 - 65.3072).abs() < 1e-9);
/// ```
#[inline]
pub fn velocity_pressure(kz: f64, kzt: f64, kd: f64, wind_speed: Mph) -> Psf {
    Psf(VELOCITY_PRESSURE_CONSTANT * kz * kzt * kd * wind_speed.0 * wind_speed.0)
}

// =============================================================================
// TILE GEOMETRY
// =============================================================================

/// Tile dimension converted from inches to feet (b = width/12, L = length/12)
#[inline]
pub fn tile_dimension(dimension: Inches) -> Feet {
    dimension.into()
}

/// Moment arm to the point of uplift
///
/// ```text
///   head                          tail
///    ●───────────────────────●─────┐
///    ←──────── 0.76 L ──────→      │
///    ←──────────────── L ─────────→
/// ```
///
/// # Formula (FBC 1609.6.3)
/// La = 0.76 · L
#[inline]
pub fn moment_arm(tile_length: Feet) -> Feet {
    Feet(MOMENT_ARM_RATIO * tile_length.0)
}

// =============================================================================
// UPLIFT MOMENT
// =============================================================================

/// Aerodynamic uplift moment about the tile's axis of rotation
///
/// # Formula
/// Ma = |qh · GCp · CL · Kd · b · La|
///
/// Suction makes the raw product negative; the magnitude is returned.
///
/// # Arguments
/// * `qh` - Velocity pressure (psf)
/// * `gcp` - External pressure coefficient
/// * `cl` - Lift coefficient
/// * `kd` - Directionality factor
/// * `b` - Exposed tile width
/// * `la` - Moment arm
///
/// # Example
/// ```rust
/// use uplift_core::equations::wind::aerodynamic_uplift_moment;
/// use uplift_core::units::{Feet, Psf};
///
/// let ma = aerodynamic_uplift_moment(Psf(100.0), -1.0, 0.2, 0.85, Feet(1.0), Feet(1.0));
/// assert!((ma.0 - 17.0).abs() < 1e-12);
/// ```
#[inline]
pub fn aerodynamic_uplift_moment(qh: Psf, gcp: f64, cl: f64, kd: f64, b: Feet, la: Feet) -> FtLbf {
    FtLbf(qh.0 * gcp * cl * kd * b.0 * la.0).magnitude()
}

/// Resistance check: the tile passes when Mf >= Ma (inclusive)
#[inline]
pub fn resistance_sufficient(ma: FtLbf, mf: FtLbf) -> bool {
    mf.0 >= ma.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_pressure() {
        // 0.00256 * 0.85 * 1.0 * 0.85 * 110^2
        let qh = velocity_pressure(0.85, KZT, 0.85, Mph(110.0));
        assert!((qh.0 - 22.38016).abs() < 1e-9);
    }

    #[test]
    fn test_velocity_pressure_scales_with_speed_squared() {
        let q1 = velocity_pressure(1.0, 1.0, 1.0, Mph(100.0));
        let q2 = velocity_pressure(1.0, 1.0, 1.0, Mph(200.0));
        assert!((q2.0 / q1.0 - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_tile_dimension() {
        let l = tile_dimension(Inches(17.0));
        assert!((l.0 - 1.4167).abs() < 1e-4);
        assert_eq!(tile_dimension(Inches(12.0)).0, 1.0);
    }

    #[test]
    fn test_moment_arm() {
        let la = moment_arm(Feet(17.0 / 12.0));
        assert!((la.0 - 1.076_667).abs() < 1e-6);
    }

    #[test]
    fn test_uplift_moment_magnitude() {
        let suction = aerodynamic_uplift_moment(Psf(65.3072), -2.0, 0.2, 0.85, Feet(1.0), Feet(0.76 * 17.0 / 12.0));
        assert!((suction.0 - 23.9068).abs() < 1e-4);

        // Positive GCp gives the same magnitude
        let pressure = aerodynamic_uplift_moment(Psf(65.3072), 2.0, 0.2, 0.85, Feet(1.0), Feet(0.76 * 17.0 / 12.0));
        assert_eq!(suction, pressure);
    }

    #[test]
    fn test_resistance_boundary_inclusive() {
        assert!(resistance_sufficient(FtLbf(500.0), FtLbf(500.0)));
        assert!(!resistance_sufficient(FtLbf(500.0), FtLbf(499.99)));
    }
}
