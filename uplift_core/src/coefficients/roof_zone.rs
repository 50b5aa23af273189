//! Roof zones and their default external pressure coefficients (GCp)

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{FieldIssue, ValidationError};

/// Default GCp by zone: (zone number, GCp)
pub const GCP_DEFAULTS: [(u8, f64); 3] = [(1, -0.9), (2, -1.3), (3, -2.0)];

/// Roof zone per ASCE 7-22 Chapter 30 components and cladding.
///
/// Serialized as its zone number (1, 2 or 3).
///
/// # Example
/// ```
/// use uplift_core::coefficients::RoofZone;
///
/// let zone = RoofZone::try_from(3).unwrap();
/// assert_eq!(zone, RoofZone::Corner);
/// assert_eq!(zone.default_gcp(), -2.0);
/// assert!(RoofZone::try_from(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum RoofZone {
    /// Zone 1 - field of the roof
    #[default]
    Interior,
    /// Zone 2 - perimeter strip
    Edge,
    /// Zone 3 - corners
    Corner,
}

impl RoofZone {
    /// All zones in numeric order
    pub const ALL: [RoofZone; 3] = [RoofZone::Interior, RoofZone::Edge, RoofZone::Corner];

    /// Zone number used on plans and in the code tables
    pub fn number(&self) -> u8 {
        match self {
            RoofZone::Interior => 1,
            RoofZone::Edge => 2,
            RoofZone::Corner => 3,
        }
    }

    /// Display name for selection lists
    pub fn display_name(&self) -> &'static str {
        match self {
            RoofZone::Interior => "1 (Interior)",
            RoofZone::Edge => "2 (Edge)",
            RoofZone::Corner => "3 (Corner)",
        }
    }

    /// Tabulated GCp for this zone (negative = suction)
    pub fn default_gcp(&self) -> f64 {
        GCP_DEFAULTS[usize::from(self.number() - 1)].1
    }
}

impl std::fmt::Display for RoofZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl TryFrom<u8> for RoofZone {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(RoofZone::Interior),
            2 => Ok(RoofZone::Edge),
            3 => Ok(RoofZone::Corner),
            other => Err(ValidationError::single(FieldIssue::invalid(
                "roof_zone",
                other.to_string(),
                "Roof zone must be 1, 2 or 3",
            ))),
        }
    }
}

impl FromStr for RoofZone {
    type Err = ValidationError;

    /// Parse a zone number from text ("1", "2" or "3")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u8 = s.trim().parse().map_err(|_| {
            ValidationError::single(FieldIssue::invalid("roof_zone", s, "Roof zone must be 1, 2 or 3"))
        })?;
        RoofZone::try_from(number)
    }
}

impl From<RoofZone> for u8 {
    fn from(zone: RoofZone) -> Self {
        zone.number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gcp_table() {
        assert_eq!(RoofZone::Interior.default_gcp(), -0.9);
        assert_eq!(RoofZone::Edge.default_gcp(), -1.3);
        assert_eq!(RoofZone::Corner.default_gcp(), -2.0);
    }

    #[test]
    fn test_table_keyed_by_zone_number() {
        for (number, gcp) in GCP_DEFAULTS {
            assert_eq!(RoofZone::try_from(number).unwrap().default_gcp(), gcp);
        }
    }

    #[test]
    fn test_zone_numbers_roundtrip() {
        for zone in RoofZone::ALL {
            assert_eq!(RoofZone::try_from(zone.number()).unwrap(), zone);
        }
    }

    #[test]
    fn test_rejects_unknown_zone() {
        for bad in [0u8, 4, 9, 255] {
            let err = RoofZone::try_from(bad).unwrap_err();
            assert!(err.has_field("roof_zone"));
        }
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(" 2 ".parse::<RoofZone>().unwrap(), RoofZone::Edge);
        for bad in ["4", "0", "2.5", "corner", "", "-1"] {
            let err = bad.parse::<RoofZone>().unwrap_err();
            assert!(err.has_field("roof_zone"), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&RoofZone::Edge).unwrap(), "2");
        let zone: RoofZone = serde_json::from_str("3").unwrap();
        assert_eq!(zone, RoofZone::Corner);
        assert!(serde_json::from_str::<RoofZone>("4").is_err());
    }
}
