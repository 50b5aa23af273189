//! Exposure categories and the velocity pressure exposure coefficient Kz
//!
//! Kz values come from ASCE 7-22 Table 26.10-1. The table rows are fixed
//! data; intermediate heights are linearly interpolated as the table notes
//! permit.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{FieldIssue, ValidationError};

/// Heights at or below this value use the first table row (ft)
pub const KZ_MIN_HEIGHT_FT: f64 = 15.0;

/// Highest tabulated height (ft); taller roofs use this row
pub const KZ_MAX_HEIGHT_FT: f64 = 500.0;

/// ASCE 7-22 Table 26.10-1 rows: (height ft, Kz exposure C, Kz exposure D)
///
/// The first row covers 0-15 ft.
pub const KZ_TABLE: [(f64, f64, f64); 22] = [
    (15.0, 0.85, 1.03),
    (20.0, 0.90, 1.08),
    (25.0, 0.94, 1.12),
    (30.0, 0.98, 1.16),
    (40.0, 1.04, 1.22),
    (50.0, 1.09, 1.27),
    (60.0, 1.13, 1.31),
    (70.0, 1.17, 1.34),
    (80.0, 1.21, 1.38),
    (90.0, 1.24, 1.40),
    (100.0, 1.26, 1.43),
    (120.0, 1.31, 1.48),
    (140.0, 1.36, 1.52),
    (160.0, 1.39, 1.55),
    (180.0, 1.43, 1.58),
    (200.0, 1.46, 1.61),
    (250.0, 1.53, 1.68),
    (300.0, 1.59, 1.73),
    (350.0, 1.64, 1.78),
    (400.0, 1.69, 1.82),
    (450.0, 1.73, 1.86),
    (500.0, 1.77, 1.89),
];

/// Surface roughness / exposure category per ASCE 7-22 Section 26.7
///
/// Only the open-terrain categories apply to the rigid tile check.
///
/// # Example
/// ```
/// use uplift_core::coefficients::ExposureCategory;
///
/// let exposure: ExposureCategory = "c".parse().unwrap();
/// assert_eq!(exposure, ExposureCategory::C);
/// assert!((exposure.kz(30.0) - 0.98).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ExposureCategory {
    /// Open terrain with scattered obstructions
    #[default]
    C,
    /// Flat, unobstructed areas and water surfaces
    D,
}

impl ExposureCategory {
    /// All exposure categories for selection lists
    pub const ALL: [ExposureCategory; 2] = [ExposureCategory::C, ExposureCategory::D];

    /// Single-letter code
    pub fn code(&self) -> &'static str {
        match self {
            ExposureCategory::C => "C",
            ExposureCategory::D => "D",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ExposureCategory::C => "Open terrain with scattered obstructions",
            ExposureCategory::D => "Flat, unobstructed areas and water surfaces",
        }
    }

    /// Table value for this category at a given row
    fn column(&self, row: &(f64, f64, f64)) -> f64 {
        match self {
            ExposureCategory::C => row.1,
            ExposureCategory::D => row.2,
        }
    }

    /// Velocity pressure exposure coefficient Kz at height `height_ft`.
    ///
    /// Exact table value at each tabulated height, linear between rows,
    /// first row at or below 15 ft, last row above 500 ft.
    pub fn kz(&self, height_ft: f64) -> f64 {
        let first = &KZ_TABLE[0];
        let last = &KZ_TABLE[KZ_TABLE.len() - 1];

        if height_ft <= first.0 {
            return self.column(first);
        }
        if height_ft >= last.0 {
            if height_ft > last.0 {
                tracing::warn!(
                    height_ft,
                    max_height_ft = KZ_MAX_HEIGHT_FT,
                    "Mean roof height above tabulated range; using 500 ft row"
                );
            }
            return self.column(last);
        }

        // Strict comparison so a tabulated height lands on t = 0 of the next row
        for pair in KZ_TABLE.windows(2) {
            let (lo, hi) = (&pair[0], &pair[1]);
            if height_ft < hi.0 {
                let t = (height_ft - lo.0) / (hi.0 - lo.0);
                let (k_lo, k_hi) = (self.column(lo), self.column(hi));
                return k_lo + t * (k_hi - k_lo);
            }
        }

        // Unreachable for finite heights; NaN falls through here
        self.column(last)
    }
}

impl std::fmt::Display for ExposureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ExposureCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "C" => Ok(ExposureCategory::C),
            "D" => Ok(ExposureCategory::D),
            _ => Err(ValidationError::single(FieldIssue::invalid(
                "exposure",
                s,
                "Exposure category must be C or D",
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_breakpoints_exact() {
        for row in KZ_TABLE.iter() {
            assert_eq!(ExposureCategory::C.kz(row.0), row.1);
            assert_eq!(ExposureCategory::D.kz(row.0), row.2);
        }
    }

    #[test]
    fn test_below_fifteen_feet() {
        assert_eq!(ExposureCategory::C.kz(0.5), 0.85);
        assert_eq!(ExposureCategory::C.kz(10.0), 0.85);
        assert_eq!(ExposureCategory::D.kz(12.0), 1.03);
    }

    #[test]
    fn test_interpolation() {
        // Halfway between 30 ft (0.98) and 40 ft (1.04)
        assert!((ExposureCategory::C.kz(35.0) - 1.01).abs() < 1e-12);
        // Quarter of the way from 100 ft (1.43) to 120 ft (1.48)
        assert!((ExposureCategory::D.kz(105.0) - 1.4425).abs() < 1e-12);
    }

    #[test]
    fn test_above_table_clamps() {
        assert_eq!(ExposureCategory::C.kz(650.0), 1.77);
        assert_eq!(ExposureCategory::D.kz(1000.0), 1.89);
    }

    #[test]
    fn test_monotonic_in_height() {
        for exposure in ExposureCategory::ALL {
            let mut previous = exposure.kz(0.1);
            let mut h = 0.1;
            while h < 600.0 {
                let kz = exposure.kz(h);
                assert!(kz >= previous, "Kz decreased at h = {} for {}", h, exposure);
                previous = kz;
                h += 0.7;
            }
        }
    }

    #[test]
    fn test_exposure_d_exceeds_c() {
        for row in KZ_TABLE.iter() {
            assert!(ExposureCategory::D.kz(row.0) > ExposureCategory::C.kz(row.0));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(" D ".parse::<ExposureCategory>().unwrap(), ExposureCategory::D);
        let err = "B".parse::<ExposureCategory>().unwrap_err();
        assert!(err.has_field("exposure"));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ExposureCategory::D).unwrap();
        assert_eq!(json, "\"D\"");
    }
}
