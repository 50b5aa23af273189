//! # Text Form Input
//!
//! The raw parameter record as an input form holds it: every field is text.
//! [`TileUpliftForm::parse`] turns it into a validated [`TileUpliftInput`]
//! or a [`ValidationError`] naming every bad field.
//!
//! GCp and Kd overrides only count when the form is in advanced mode; with
//! advanced mode off whatever text sits in those fields is ignored.
//!
//! ## Example
//!
//! ```rust
//! use uplift_core::calculations::form::TileUpliftForm;
//!
//! let mut form = TileUpliftForm::default();
//! form.gcp = "-1.0".to_string(); // ignored, advanced mode is off
//! let input = form.parse().unwrap();
//! assert_eq!(input.gcp_override, None);
//!
//! form.roof_zone = "4".to_string();
//! assert!(form.parse().unwrap_err().has_field("roof_zone"));
//! ```

use serde::{Deserialize, Serialize};

use super::tile_uplift::{calculate, require_finite, require_positive, TileUpliftInput, TileUpliftResult};
use crate::coefficients::{ExposureCategory, RoofZone, KD_DEFAULT};
use crate::errors::{CalcResult, FieldIssue, IssueCollector, ValidationError};

/// Raw text parameters, plus the advanced-override switch.
///
/// `Default` gives the starting values of the calculator form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileUpliftForm {
    pub wind_speed: String,
    pub mean_height: String,
    pub exposure: String,
    pub roof_zone: String,
    pub tile_length: String,
    pub tile_width: String,
    pub lift_coefficient: String,
    /// Empty means no resistance check
    #[serde(default)]
    pub provided_resistance: String,
    #[serde(default)]
    pub gcp: String,
    #[serde(default)]
    pub kd: String,
    /// When false, `gcp` and `kd` are ignored
    #[serde(default)]
    pub advanced: bool,
}

impl Default for TileUpliftForm {
    fn default() -> Self {
        TileUpliftForm {
            wind_speed: "175".to_string(),
            mean_height: "30".to_string(),
            exposure: "C".to_string(),
            roof_zone: "3".to_string(),
            tile_length: "17".to_string(),
            tile_width: "12".to_string(),
            lift_coefficient: "0.2".to_string(),
            provided_resistance: "27.8".to_string(),
            gcp: "-2.0".to_string(),
            kd: "0.85".to_string(),
            advanced: false,
        }
    }
}

/// Parse required numeric text
fn parse_required(field: &str, text: &str) -> Result<f64, FieldIssue> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FieldIssue::missing(field));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| FieldIssue::invalid(field, trimmed, "Not a valid number"))?;
    require_finite(field, value)
}

/// Parse optional numeric text; empty means absent
fn parse_optional(field: &str, text: &str) -> Result<Option<f64>, FieldIssue> {
    if text.trim().is_empty() {
        Ok(None)
    } else {
        parse_required(field, text).map(Some)
    }
}

impl TileUpliftForm {
    /// Validate every field and build the typed input.
    pub fn parse(&self) -> Result<TileUpliftInput, ValidationError> {
        let mut issues = IssueCollector::default();

        let positive = |field: &str, text: &str| parse_required(field, text).and_then(|v| require_positive(field, v));

        let wind_speed_mph = issues.take(positive("wind_speed_mph", &self.wind_speed));
        let mean_roof_height_ft = issues.take(positive("mean_roof_height_ft", &self.mean_height));
        let exposure = if self.exposure.trim().is_empty() {
            issues.push(FieldIssue::missing("exposure"));
            None
        } else {
            issues.absorb(self.exposure.parse::<ExposureCategory>())
        };
        let roof_zone = if self.roof_zone.trim().is_empty() {
            issues.push(FieldIssue::missing("roof_zone"));
            None
        } else {
            issues.absorb(self.roof_zone.parse::<RoofZone>())
        };
        let tile_length_in = issues.take(positive("tile_length_in", &self.tile_length));
        let tile_width_in = issues.take(positive("tile_width_in", &self.tile_width));
        let lift_coefficient = issues.take(parse_required("lift_coefficient", &self.lift_coefficient));
        let provided_resistance_ftlbf = issues
            .take(parse_optional("provided_resistance_ftlbf", &self.provided_resistance))
            .flatten();

        let (gcp_override, kd_override) = if self.advanced {
            (
                issues.take(parse_optional("gcp_override", &self.gcp)).flatten(),
                issues.take(parse_optional("kd_override", &self.kd)).flatten(),
            )
        } else {
            (None, None)
        };

        issues.finish()?;

        let build = || {
            Some(TileUpliftInput {
                wind_speed_mph: wind_speed_mph?,
                mean_roof_height_ft: mean_roof_height_ft?,
                exposure: exposure?,
                roof_zone: roof_zone?,
                tile_length_in: tile_length_in?,
                tile_width_in: tile_width_in?,
                lift_coefficient: lift_coefficient?,
                provided_resistance_ftlbf,
                gcp_override,
                kd_override,
            })
        };
        build().ok_or_else(|| ValidationError::single(FieldIssue::missing("form")))
    }

    /// Parse, then run the uplift calculation
    pub fn calculate(&self) -> CalcResult<TileUpliftResult> {
        let input = self.parse()?;
        calculate(&input)
    }

    /// Refresh the displayed GCp/Kd text from the current roof zone.
    ///
    /// Only applies outside advanced mode; in advanced mode the user's
    /// values stay. An unrecognized zone clears the GCp text.
    pub fn with_zone_defaults(mut self) -> Self {
        if !self.advanced {
            self.gcp = self
                .roof_zone
                .parse::<RoofZone>()
                .map(|zone| format!("{:?}", zone.default_gcp()))
                .unwrap_or_default();
            self.kd = format!("{:?}", KD_DEFAULT);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::tile_uplift::Verdict;

    #[test]
    fn test_default_form_parses() {
        let input = TileUpliftForm::default().parse().unwrap();
        assert_eq!(input.wind_speed_mph, 175.0);
        assert_eq!(input.mean_roof_height_ft, 30.0);
        assert_eq!(input.exposure, ExposureCategory::C);
        assert_eq!(input.roof_zone, RoofZone::Corner);
        assert_eq!(input.tile_length_in, 17.0);
        assert_eq!(input.tile_width_in, 12.0);
        assert_eq!(input.lift_coefficient, 0.2);
        assert_eq!(input.provided_resistance_ftlbf, Some(27.8));
        assert_eq!(input.gcp_override, None);
        assert_eq!(input.kd_override, None);
    }

    #[test]
    fn test_default_form_end_to_end() {
        let result = TileUpliftForm::default().calculate().unwrap();
        assert!((result.ma_ftlbf - 23.9068).abs() < 1e-4);
        assert_eq!(result.verdict(), Some(Verdict::Pass));
    }

    #[test]
    fn test_stray_overrides_ignored_without_advanced() {
        let form = TileUpliftForm {
            gcp: "-5.0".to_string(),
            kd: "not a number".to_string(),
            ..TileUpliftForm::default()
        };
        let input = form.parse().unwrap();
        assert_eq!(input.gcp_override, None);
        assert_eq!(input.kd_override, None);
    }

    #[test]
    fn test_advanced_overrides_applied() {
        let form = TileUpliftForm {
            advanced: true,
            gcp: "-1.1".to_string(),
            kd: "0.9".to_string(),
            ..TileUpliftForm::default()
        };
        let result = form.calculate().unwrap();
        assert_eq!(result.gcp, -1.1);
        assert_eq!(result.kd, 0.9);
    }

    #[test]
    fn test_advanced_empty_override_is_absent() {
        let form = TileUpliftForm {
            advanced: true,
            gcp: "".to_string(),
            kd: " ".to_string(),
            ..TileUpliftForm::default()
        };
        let input = form.parse().unwrap();
        assert_eq!(input.gcp_override, None);
        assert_eq!(input.kd_override, None);
    }

    #[test]
    fn test_advanced_bad_override_rejected() {
        let form = TileUpliftForm {
            advanced: true,
            kd: "abc".to_string(),
            ..TileUpliftForm::default()
        };
        assert!(form.parse().unwrap_err().has_field("kd_override"));
    }

    #[test]
    fn test_empty_resistance_is_absent() {
        let form = TileUpliftForm {
            provided_resistance: "".to_string(),
            ..TileUpliftForm::default()
        };
        let result = form.calculate().unwrap();
        assert!(result.resistance.is_none());
    }

    #[test]
    fn test_every_bad_field_reported() {
        let form = TileUpliftForm {
            wind_speed: "".to_string(),
            mean_height: "-3".to_string(),
            exposure: "B".to_string(),
            roof_zone: "4".to_string(),
            tile_length: "seventeen".to_string(),
            tile_width: "NaN".to_string(),
            lift_coefficient: "inf".to_string(),
            provided_resistance: "x".to_string(),
            ..TileUpliftForm::default()
        };
        let err = form.parse().unwrap_err();
        assert_eq!(
            err.fields(),
            vec![
                "wind_speed_mph",
                "mean_roof_height_ft",
                "exposure",
                "roof_zone",
                "tile_length_in",
                "tile_width_in",
                "lift_coefficient",
                "provided_resistance_ftlbf",
            ]
        );
    }

    #[test]
    fn test_roof_zone_four_produces_no_result() {
        let form = TileUpliftForm {
            roof_zone: "4".to_string(),
            ..TileUpliftForm::default()
        };
        let err = form.calculate().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.as_validation().unwrap().has_field("roof_zone"));
    }

    #[test]
    fn test_exposure_case_insensitive() {
        let form = TileUpliftForm {
            exposure: "d".to_string(),
            ..TileUpliftForm::default()
        };
        assert_eq!(form.parse().unwrap().exposure, ExposureCategory::D);
    }

    #[test]
    fn test_zone_defaults_sync() {
        let form = TileUpliftForm {
            roof_zone: "1".to_string(),
            gcp: "-7".to_string(),
            kd: "1.0".to_string(),
            ..TileUpliftForm::default()
        }
        .with_zone_defaults();
        assert_eq!(form.gcp, "-0.9");
        assert_eq!(form.kd, "0.85");

        let bad_zone = TileUpliftForm {
            roof_zone: "9".to_string(),
            ..TileUpliftForm::default()
        }
        .with_zone_defaults();
        assert_eq!(bad_zone.gcp, "");
    }

    #[test]
    fn test_zone_defaults_leave_advanced_values() {
        let form = TileUpliftForm {
            advanced: true,
            gcp: "-7".to_string(),
            ..TileUpliftForm::default()
        }
        .with_zone_defaults();
        assert_eq!(form.gcp, "-7");
    }
}
