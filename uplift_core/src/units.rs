//! # Unit Types
//!
//! Type-safe wrappers for the handful of units the uplift check needs.
//! These are plain `f64` newtypes that serialize as bare numbers.
//!
//! ## US Customary Units
//!
//! The governing equations are written in US customary units:
//! - Length: feet (ft), inches (in)
//! - Wind speed: miles per hour (mph)
//! - Pressure: pounds per square foot (psf)
//! - Moment: foot-pounds force (ft-lbf)
//!
//! ## Example
//!
//! ```rust
//! use uplift_core::units::{Feet, Inches};
//!
//! let tile_width = Inches(12.0);
//! let width_ft: Feet = tile_width.into();
//! assert_eq!(width_ft.0, 1.0);
//! ```

use serde::{Deserialize, Serialize};

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * INCHES_PER_FOOT)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / INCHES_PER_FOOT)
    }
}

// ============================================================================
// Wind Units
// ============================================================================

/// Wind speed in miles per hour
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mph(pub f64);

/// Pressure in pounds per square foot
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psf(pub f64);

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in foot-pounds force
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FtLbf(pub f64);

impl FtLbf {
    /// Magnitude of the moment, dropping the sign convention
    pub fn magnitude(self) -> Self {
        FtLbf(self.0.abs())
    }
}
