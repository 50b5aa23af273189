//! # Wind Coefficients
//!
//! Resolves the coefficients that feed the uplift moment:
//!
//! | Symbol | Source                          | Default            |
//! |--------|---------------------------------|--------------------|
//! | Kz     | ASCE 7-22 Table 26.10-1         | table lookup       |
//! | GCp    | ASCE 7-22 Ch. 30, by roof zone  | -0.9 / -1.3 / -2.0 |
//! | Kd     | ASCE 7-22 Table 26.6-1          | 0.85               |
//! | Kzt    | ASCE 7-22 Section 26.8          | 1.0 (fixed)        |
//!
//! GCp and Kd follow one rule: an explicit override wins, otherwise the
//! tabulated default. Overrides are used verbatim.
//!
//! ## Example
//!
//! ```rust
//! use uplift_core::coefficients::{CoefficientOverrides, CoefficientSet, ExposureCategory, RoofZone};
//! use uplift_core::units::Mph;
//!
//! let coeffs = CoefficientSet::resolve(
//!     ExposureCategory::C,
//!     30.0,
//!     RoofZone::Corner,
//!     CoefficientOverrides::default(),
//!     Mph(175.0),
//! );
//! assert_eq!(coeffs.gcp, -2.0);
//! assert_eq!(coeffs.kd, 0.85);
//! ```

pub mod exposure;
pub mod roof_zone;

use serde::{Deserialize, Serialize};

use crate::equations::wind::{velocity_pressure, KZT};
use crate::units::{Mph, Psf};

pub use exposure::ExposureCategory;
pub use roof_zone::RoofZone;

/// Wind directionality factor for components and cladding (ASCE 7-22 Table 26.6-1)
pub const KD_DEFAULT: f64 = 0.85;

/// Code section references for the resolved coefficients.
pub mod asce_ref {
    /// Velocity pressure equation
    pub const VELOCITY_PRESSURE: &str = "ASCE 7-22 Eq. 26.10-1";
    /// Exposure coefficient table
    pub const KZ: &str = "ASCE 7-22 Table 26.10-1";
    /// Roof pressure coefficients
    pub const GCP: &str = "ASCE 7-22 Ch. 30";
    /// Directionality factor
    pub const KD: &str = "ASCE 7-22 Table 26.6-1";
    /// Rigid tile uplift moment
    pub const RIGID_TILE: &str = "FBC 2023 Section 1609.6.3, Eq. 16-18";
}

/// Explicit replacements for the tabulated GCp and Kd
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CoefficientOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kd: Option<f64>,
}

impl CoefficientOverrides {
    /// Whether any override is set
    pub fn any(&self) -> bool {
        self.gcp.is_some() || self.kd.is_some()
    }
}

/// Coefficients for one calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientSet {
    /// Velocity pressure exposure coefficient
    pub kz: f64,
    /// External pressure coefficient (negative = suction)
    pub gcp: f64,
    /// Wind directionality factor
    pub kd: f64,
    /// Topographic factor
    pub kzt: f64,
    /// Velocity pressure at mean roof height
    pub qh_psf: Psf,
}

impl CoefficientSet {
    /// Resolve every coefficient for the given site and roof zone.
    ///
    /// Defaults are looked up fresh on every call; nothing is cached
    /// between calculations.
    pub fn resolve(
        exposure: ExposureCategory,
        mean_roof_height_ft: f64,
        roof_zone: RoofZone,
        overrides: CoefficientOverrides,
        wind_speed: Mph,
    ) -> Self {
        let kz = exposure.kz(mean_roof_height_ft);
        let gcp = overrides.gcp.unwrap_or_else(|| roof_zone.default_gcp());
        let kd = overrides.kd.unwrap_or(KD_DEFAULT);
        let qh_psf = velocity_pressure(kz, KZT, kd, wind_speed);

        tracing::debug!(
            exposure = exposure.code(),
            mean_roof_height_ft,
            zone = roof_zone.number(),
            kz,
            gcp,
            kd,
            qh_psf = qh_psf.0,
            overridden = overrides.any(),
            "Resolved wind coefficients"
        );

        CoefficientSet { kz, gcp, kd, kzt: KZT, qh_psf }
    }
}
