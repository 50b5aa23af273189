//! # Rigid Tile Uplift Calculation
//!
//! Checks a rigid roof tile against wind uplift per FBC 2023 Section
//! 1609.6.3. The tile is treated as a lever hinged at its head: suction acts
//! at the point of uplift 0.76L down the tile and the resulting moment is
//! compared with the tile's rated resistance.
//!
//! ## Pipeline
//!
//! 1. [`TileUpliftInput::validate`] range-checks the record
//! 2. [`CoefficientSet::resolve`] looks up Kz, GCp, Kd and computes qh
//! 3. [`calculate`] combines coefficients and tile geometry into Ma and,
//!    when a resistance is given, the verdict
//!
//! ## Example
//!
//! ```rust
//! use uplift_core::calculations::tile_uplift::{calculate, TileUpliftInput, Verdict};
//! use uplift_core::coefficients::{ExposureCategory, RoofZone};
//!
//! let input = TileUpliftInput {
//!     wind_speed_mph: 175.0,
//!     mean_roof_height_ft: 30.0,
//!     exposure: ExposureCategory::C,
//!     roof_zone: RoofZone::Corner,
//!     tile_length_in: 17.0,
//!     tile_width_in: 12.0,
//!     lift_coefficient: 0.2,
//!     provided_resistance_ftlbf: Some(27.8),
//!     gcp_override: None,
//!     kd_override: None,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.ma_ftlbf - 23.9068).abs() < 1e-3);
//! assert_eq!(result.verdict(), Some(Verdict::Pass));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coefficients::{asce_ref, CoefficientOverrides, CoefficientSet, ExposureCategory, RoofZone};
use crate::equations::wind::{aerodynamic_uplift_moment, moment_arm, resistance_sufficient, tile_dimension};
use crate::errors::{CalcError, CalcResult, FieldIssue, IssueCollector, ValidationError};
use crate::units::{Feet, FtLbf, Inches, Mph};

/// Mean roof height limit for the rigid tile equation (ft), FBC 1609.6.3
pub const MEAN_ROOF_HEIGHT_LIMIT_FT: f64 = 40.0;

/// Tile length limits for the rigid tile equation (ft), FBC 1609.6.3
pub const TILE_LENGTH_LIMITS_FT: (f64, f64) = (1.0, 1.75);

/// Exposed tile width limits for the rigid tile equation (ft), FBC 1609.6.3
pub const TILE_WIDTH_LIMITS_FT: (f64, f64) = (0.67, 1.25);

// ============================================================================
// Field checks shared by the typed record and the text form
// ============================================================================

pub(crate) fn require_finite(field: &str, value: f64) -> Result<f64, FieldIssue> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FieldIssue::invalid(field, value.to_string(), "Must be a finite number"))
    }
}

pub(crate) fn require_positive(field: &str, value: f64) -> Result<f64, FieldIssue> {
    let value = require_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(FieldIssue::invalid(field, value.to_string(), "Must be greater than zero"))
    }
}

pub(crate) fn require_finite_opt(field: &str, value: Option<f64>) -> Result<Option<f64>, FieldIssue> {
    value.map(|v| require_finite(field, v)).transpose()
}

// ============================================================================
// Input
// ============================================================================

/// Input parameters for a rigid tile uplift check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wind_speed_mph": 175.0,
///   "mean_roof_height_ft": 30.0,
///   "exposure": "C",
///   "roof_zone": 3,
///   "tile_length_in": 17.0,
///   "tile_width_in": 12.0,
///   "lift_coefficient": 0.2,
///   "provided_resistance_ftlbf": 27.8
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileUpliftInput {
    /// Ultimate design wind speed Vult (mph)
    pub wind_speed_mph: f64,

    /// Mean roof height h (ft)
    pub mean_roof_height_ft: f64,

    /// Exposure category (C or D)
    pub exposure: ExposureCategory,

    /// Roof zone (1 interior, 2 edge, 3 corner)
    pub roof_zone: RoofZone,

    /// Overall tile length (in)
    pub tile_length_in: f64,

    /// Exposed tile width (in)
    pub tile_width_in: f64,

    /// Lift coefficient CL of the tile profile
    pub lift_coefficient: f64,

    /// Rated resistance Mf (ft-lbf), e.g. from a product approval
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provided_resistance_ftlbf: Option<f64>,

    /// Replaces the roof zone's tabulated GCp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcp_override: Option<f64>,

    /// Replaces the default Kd of 0.85
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kd_override: Option<f64>,
}

impl TileUpliftInput {
    /// Validate input parameters, reporting every failing field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = IssueCollector::default();
        issues.take(require_positive("wind_speed_mph", self.wind_speed_mph));
        issues.take(require_positive("mean_roof_height_ft", self.mean_roof_height_ft));
        issues.take(require_positive("tile_length_in", self.tile_length_in));
        issues.take(require_positive("tile_width_in", self.tile_width_in));
        issues.take(require_finite("lift_coefficient", self.lift_coefficient));
        issues.take(require_finite_opt("provided_resistance_ftlbf", self.provided_resistance_ftlbf));
        issues.take(require_finite_opt("gcp_override", self.gcp_override));
        issues.take(require_finite_opt("kd_override", self.kd_override));
        issues.finish()
    }

    /// Parse and validate a JSON record.
    ///
    /// Only malformed JSON (or a non-object) is a serialization error;
    /// missing, mistyped or out-of-range fields are reported together as a
    /// `ValidationError`, the same as the text form.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        let record = value
            .as_object()
            .ok_or_else(|| CalcError::serialization("Input record must be a JSON object"))?;
        Ok(Self::from_record(record)?)
    }

    fn from_record(record: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut issues = IssueCollector::default();

        let positive = |field: &str| json_number(record, field).and_then(|v| require_positive(field, v));

        let wind_speed_mph = issues.take(positive("wind_speed_mph"));
        let mean_roof_height_ft = issues.take(positive("mean_roof_height_ft"));
        let exposure = match json_field(record, "exposure").and_then(|v| {
            v.as_str()
                .ok_or_else(|| FieldIssue::invalid("exposure", v.to_string(), "Exposure category must be C or D"))
        }) {
            Ok(text) => issues.absorb(text.parse::<ExposureCategory>()),
            Err(issue) => {
                issues.push(issue);
                None
            }
        };
        let roof_zone = match json_field(record, "roof_zone").and_then(|v| {
            v.as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .ok_or_else(|| FieldIssue::invalid("roof_zone", v.to_string(), "Roof zone must be 1, 2 or 3"))
        }) {
            Ok(number) => issues.absorb(RoofZone::try_from(number)),
            Err(issue) => {
                issues.push(issue);
                None
            }
        };
        let tile_length_in = issues.take(positive("tile_length_in"));
        let tile_width_in = issues.take(positive("tile_width_in"));
        let lift_coefficient = issues.take(json_number(record, "lift_coefficient"));
        let provided_resistance_ftlbf = issues
            .take(json_optional_number(record, "provided_resistance_ftlbf"))
            .flatten();
        let gcp_override = issues.take(json_optional_number(record, "gcp_override")).flatten();
        let kd_override = issues.take(json_optional_number(record, "kd_override")).flatten();

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
        build().ok_or_else(|| ValidationError::single(FieldIssue::missing("record")))
    }

    /// GCp/Kd overrides carried by this record
    pub fn overrides(&self) -> CoefficientOverrides {
        CoefficientOverrides {
            gcp: self.gcp_override,
            kd: self.kd_override,
        }
    }

    /// Exposed tile width b
    pub fn tile_width(&self) -> Feet {
        tile_dimension(Inches(self.tile_width_in))
    }

    /// Tile length L
    pub fn tile_length(&self) -> Feet {
        tile_dimension(Inches(self.tile_length_in))
    }

    /// Prescriptive limits of the rigid tile equation that this tile falls outside of.
    ///
    /// These are advisory and never change Ma or the verdict.
    pub fn applicability(&self) -> Vec<ApplicabilityNote> {
        let mut notes = Vec::new();

        if self.mean_roof_height_ft > MEAN_ROOF_HEIGHT_LIMIT_FT {
            notes.push(ApplicabilityNote {
                parameter: "mean_roof_height_ft".to_string(),
                value: self.mean_roof_height_ft,
                message: format!(
                    "Mean roof height {:.2} ft exceeds {:.0} ft",
                    self.mean_roof_height_ft, MEAN_ROOF_HEIGHT_LIMIT_FT
                ),
            });
        }

        let length_ft = self.tile_length().0;
        let (min_len, max_len) = TILE_LENGTH_LIMITS_FT;
        if length_ft < min_len || length_ft > max_len {
            notes.push(ApplicabilityNote {
                parameter: "tile_length_in".to_string(),
                value: self.tile_length_in,
                message: format!(
                    "Tile length {:.2} in ({:.2} ft) is outside {:.2}-{:.2} ft",
                    self.tile_length_in, length_ft, min_len, max_len
                ),
            });
        }

        let width_ft = self.tile_width().0;
        let (min_w, max_w) = TILE_WIDTH_LIMITS_FT;
        if width_ft < min_w || width_ft > max_w {
            notes.push(ApplicabilityNote {
                parameter: "tile_width_in".to_string(),
                value: self.tile_width_in,
                message: format!(
                    "Exposed tile width {:.2} in ({:.2} ft) is outside {:.2}-{:.2} ft",
                    self.tile_width_in, width_ft, min_w, max_w
                ),
            });
        }

        notes
    }
}

fn json_field<'a>(record: &'a Map<String, Value>, field: &str) -> Result<&'a Value, FieldIssue> {
    match record.get(field) {
        None | Some(Value::Null) => Err(FieldIssue::missing(field)),
        Some(value) => Ok(value),
    }
}

fn json_number(record: &Map<String, Value>, field: &str) -> Result<f64, FieldIssue> {
    let value = json_field(record, field)?;
    let number = value
        .as_f64()
        .ok_or_else(|| FieldIssue::invalid(field, value.to_string(), "Not a valid number"))?;
    require_finite(field, number)
}

fn json_optional_number(record: &Map<String, Value>, field: &str) -> Result<Option<f64>, FieldIssue> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(_) => json_number(record, field).map(Some),
    }
}

// ============================================================================
// Result
// ============================================================================

/// Outcome of the resistance check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "Pass"),
            Verdict::Fail => write!(f, "Fail"),
        }
    }
}

/// Provided resistance and the verdict it yields.
///
/// Only exists when a resistance was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResistanceCheck {
    /// Provided resistance Mf (ft-lbf)
    pub mf_ftlbf: f64,
    /// Pass when Mf >= Ma
    pub result: Verdict,
}

impl ResistanceCheck {
    /// Compare a resistance against the uplift moment
    pub fn evaluate(ma: FtLbf, mf: FtLbf) -> Self {
        let result = if resistance_sufficient(ma, mf) {
            Verdict::Pass
        } else {
            Verdict::Fail
        };
        ResistanceCheck { mf_ftlbf: mf.0, result }
    }
}

/// A prescriptive limit of the rigid tile equation that the input exceeds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicabilityNote {
    /// Input field the note refers to
    pub parameter: String,
    /// Value of `parameter`, in that field's units
    pub value: f64,
    pub message: String,
}

/// One labelled line of the calculation breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownRow {
    pub label: &'static str,
    pub symbol: &'static str,
    pub value: f64,
    /// Empty for dimensionless coefficients
    pub unit: &'static str,
    pub note: &'static str,
}

/// Results from a rigid tile uplift check.
///
/// All values are full precision; rounding for display is up to the caller.
///
/// ## JSON Example
///
/// ```json
/// {
///   "ma_ftlbf": 23.9068,
///   "qh_psf": 65.3072,
///   "kz": 0.98,
///   "gcp": -2.0,
///   "kd": 0.85,
///   "cl": 0.2,
///   "b_ft": 1.0,
///   "l_ft": 1.41667,
///   "la_ft": 1.07667,
///   "mf_ftlbf": 27.8,
///   "result": "Pass"
/// }
/// ```
///
/// `mf_ftlbf` and `result` are absent when no resistance was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileUpliftResult {
    /// Aerodynamic uplift moment Ma (ft-lbf), as a magnitude
    pub ma_ftlbf: f64,

    /// Velocity pressure at mean roof height qh (psf)
    pub qh_psf: f64,

    /// Velocity pressure exposure coefficient Kz
    pub kz: f64,

    /// External pressure coefficient GCp used
    pub gcp: f64,

    /// Directionality factor Kd used
    pub kd: f64,

    /// Lift coefficient CL
    pub cl: f64,

    /// Exposed tile width b (ft)
    pub b_ft: f64,

    /// Tile length L (ft)
    pub l_ft: f64,

    /// Moment arm La (ft)
    pub la_ft: f64,

    /// Resistance check, present only when Mf was supplied
    #[serde(flatten)]
    pub resistance: Option<ResistanceCheck>,

    /// Prescriptive limits exceeded by the input
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applicability: Vec<ApplicabilityNote>,
}

impl TileUpliftResult {
    /// Verdict, if a resistance was supplied
    pub fn verdict(&self) -> Option<Verdict> {
        self.resistance.map(|check| check.result)
    }

    /// Pass/fail when a resistance was supplied
    pub fn passes(&self) -> Option<bool> {
        self.verdict().map(|v| v.is_pass())
    }

    /// Labelled rows for display, in calculation order.
    ///
    /// The Mf row is included only when a resistance was supplied.
    pub fn breakdown(&self) -> Vec<BreakdownRow> {
        let mut rows = vec![
            BreakdownRow {
                label: "Velocity Pressure",
                symbol: "qh",
                value: self.qh_psf,
                unit: "psf",
                note: asce_ref::VELOCITY_PRESSURE,
            },
            BreakdownRow {
                label: "Exposure Coefficient",
                symbol: "Kz",
                value: self.kz,
                unit: "",
                note: asce_ref::KZ,
            },
            BreakdownRow {
                label: "Roof Pressure Coeff.",
                symbol: "GCp",
                value: self.gcp,
                unit: "",
                note: asce_ref::GCP,
            },
            BreakdownRow {
                label: "Directionality Factor",
                symbol: "Kd",
                value: self.kd,
                unit: "",
                note: asce_ref::KD,
            },
            BreakdownRow {
                label: "Lift Coefficient",
                symbol: "CL",
                value: self.cl,
                unit: "",
                note: "Tile profile, user supplied",
            },
            BreakdownRow {
                label: "Exposed Tile Width",
                symbol: "b",
                value: self.b_ft,
                unit: "ft",
                note: "Width / 12",
            },
            BreakdownRow {
                label: "Tile Length",
                symbol: "L",
                value: self.l_ft,
                unit: "ft",
                note: "Length / 12",
            },
            BreakdownRow {
                label: "Moment Arm",
                symbol: "La",
                value: self.la_ft,
                unit: "ft",
                note: "0.76 L from head of tile",
            },
        ];

        if let Some(check) = self.resistance {
            rows.push(BreakdownRow {
                label: "Provided Resistance",
                symbol: "Mf",
                value: check.mf_ftlbf,
                unit: "ft-lbf",
                note: "Rated resistance, user supplied",
            });
        }

        rows
    }
}

// ============================================================================
// Calculation
// ============================================================================

/// Calculate the aerodynamic uplift moment on a rigid roof tile.
///
/// # Arguments
///
/// * `input` - Tile, site and coefficient parameters
///
/// # Returns
///
/// * `Ok(TileUpliftResult)` - Moment, coefficients and (optionally) verdict
/// * `Err(CalcError::Validation)` - If any input field is invalid; no
///   partial result is produced
pub fn calculate(input: &TileUpliftInput) -> CalcResult<TileUpliftResult> {
    input.validate()?;

    let coeffs = CoefficientSet::resolve(
        input.exposure,
        input.mean_roof_height_ft,
        input.roof_zone,
        input.overrides(),
        Mph(input.wind_speed_mph),
    );

    let b = input.tile_width();
    let l = input.tile_length();
    let la = moment_arm(l);

    let ma = aerodynamic_uplift_moment(coeffs.qh_psf, coeffs.gcp, input.lift_coefficient, coeffs.kd, b, la);

    let resistance = input
        .provided_resistance_ftlbf
        .map(|mf| ResistanceCheck::evaluate(ma, FtLbf(mf)));

    let applicability = input.applicability();
    for note in &applicability {
        tracing::warn!(parameter = %note.parameter, "{}", note.message);
    }

    tracing::debug!(
        ma_ftlbf = ma.0,
        verdict = ?resistance.map(|check| check.result),
        "Tile uplift calculated"
    );

    Ok(TileUpliftResult {
        ma_ftlbf: ma.0,
        qh_psf: coeffs.qh_psf.0,
        kz: coeffs.kz,
        gcp: coeffs.gcp,
        kd: coeffs.kd,
        cl: input.lift_coefficient,
        b_ft: b.0,
        l_ft: l.0,
        la_ft: la.0,
        resistance,
        applicability,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn golden_input() -> TileUpliftInput {
        TileUpliftInput {
            wind_speed_mph: 175.0,
            mean_roof_height_ft: 30.0,
            exposure: ExposureCategory::C,
            roof_zone: RoofZone::Corner,
            tile_length_in: 17.0,
            tile_width_in: 12.0,
            lift_coefficient: 0.2,
            provided_resistance_ftlbf: Some(27.8),
            gcp_override: None,
            kd_override: None,
        }
    }

    #[test]
    fn test_golden_values() {
        let result = calculate(&golden_input()).unwrap();

        assert_eq!(result.kz, 0.98);
        assert_eq!(result.gcp, -2.0);
        assert_eq!(result.kd, 0.85);
        assert_eq!(result.cl, 0.2);
        assert_eq!(result.b_ft, 1.0);
        // qh = 0.00256 * 0.98 * 1.0 * 0.85 * 175^2
        assert!((result.qh_psf - 65.3072).abs() < 1e-9);
        assert!((result.l_ft - 1.41667).abs() < 1e-5);
        // La = 0.76 * 17/12
        assert!((result.la_ft - 1.076_667).abs() < 1e-6);
        // Ma = 65.3072 * 2.0 * 0.2 * 0.85 * 1.0 * 1.076667
        assert!((result.ma_ftlbf - 23.906_789).abs() < 1e-5);

        let check = result.resistance.unwrap();
        assert_eq!(check.mf_ftlbf, 27.8);
        assert_eq!(check.result, Verdict::Pass);
        assert!(result.applicability.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let input = golden_input();
        let first = calculate(&input).unwrap();
        for _ in 0..10 {
            let again = calculate(&input).unwrap();
            assert_eq!(first.ma_ftlbf.to_bits(), again.ma_ftlbf.to_bits());
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_length_conversion() {
        let result = calculate(&golden_input()).unwrap();
        assert!((result.l_ft - 17.0 / 12.0).abs() < 1e-4);
        assert!((result.l_ft - 1.4167).abs() < 1e-4);
    }

    #[test]
    fn test_pass_fail_boundary() {
        let ma = calculate(&golden_input()).unwrap().ma_ftlbf;

        let mut input = golden_input();
        input.provided_resistance_ftlbf = Some(ma);
        assert_eq!(calculate(&input).unwrap().verdict(), Some(Verdict::Pass));

        input.provided_resistance_ftlbf = Some(ma - 0.01);
        assert_eq!(calculate(&input).unwrap().verdict(), Some(Verdict::Fail));
    }

    #[test]
    fn test_resistance_check_at_500() {
        assert_eq!(ResistanceCheck::evaluate(FtLbf(500.0), FtLbf(500.0)).result, Verdict::Pass);
        assert_eq!(ResistanceCheck::evaluate(FtLbf(500.0), FtLbf(499.99)).result, Verdict::Fail);
    }

    #[test]
    fn test_no_resistance_omits_verdict() {
        let mut input = golden_input();
        input.provided_resistance_ftlbf = None;
        let result = calculate(&input).unwrap();

        assert!(result.resistance.is_none());
        assert_eq!(result.verdict(), None);
        assert_eq!(result.passes(), None);

        let json = serde_json::to_value(&result).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("mf_ftlbf"));
        assert!(!obj.contains_key("result"));
        assert!(!obj.contains_key("resistance"));
        assert!(obj.contains_key("ma_ftlbf"));

        assert!(result.breakdown().iter().all(|row| row.symbol != "Mf"));
    }

    #[test]
    fn test_resistance_flattened_in_json() {
        let result = calculate(&golden_input()).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["mf_ftlbf"], 27.8);
        assert_eq!(json["result"], "Pass");
    }

    #[test]
    fn test_overrides_flow_through() {
        let mut input = golden_input();
        input.gcp_override = Some(-1.0);
        input.kd_override = Some(1.0);
        let result = calculate(&input).unwrap();
        assert_eq!(result.gcp, -1.0);
        assert_eq!(result.kd, 1.0);

        // qh = 0.00256 * 0.98 * 175^2 = 76.832; Ma = 76.832 * 1.0 * 0.2 * 1.0 * 1.0 * La
        let expected = 76.832 * 0.2 * 0.76 * 17.0 / 12.0;
        assert!((result.ma_ftlbf - expected).abs() < 1e-9);
    }

    #[test]
    fn test_zone_default_applied_on_every_call() {
        let mut input = golden_input();
        input.gcp_override = Some(-0.5);
        assert_eq!(calculate(&input).unwrap().gcp, -0.5);

        input.gcp_override = None;
        input.roof_zone = RoofZone::Edge;
        assert_eq!(calculate(&input).unwrap().gcp, -1.3);
    }

    #[test]
    fn test_invalid_inputs_listed_together() {
        let mut input = golden_input();
        input.wind_speed_mph = 0.0;
        input.tile_width_in = -12.0;
        input.lift_coefficient = f64::NAN;

        let err = calculate(&input).unwrap_err();
        let validation = err.as_validation().unwrap();
        assert_eq!(
            validation.fields(),
            vec!["wind_speed_mph", "tile_width_in", "lift_coefficient"]
        );
    }

    #[test]
    fn test_non_finite_override_rejected() {
        let mut input = golden_input();
        input.kd_override = Some(f64::INFINITY);
        let err = calculate(&input).unwrap_err();
        assert!(matches!(err, CalcError::Validation(ref v) if v.has_field("kd_override")));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "wind_speed_mph": 175.0,
            "mean_roof_height_ft": 30.0,
            "exposure": "C",
            "roof_zone": 3,
            "tile_length_in": 17.0,
            "tile_width_in": 12.0,
            "lift_coefficient": 0.2,
            "provided_resistance_ftlbf": 27.8
        }"#;
        let input = TileUpliftInput::from_json(json).unwrap();
        assert_eq!(input, golden_input());
    }

    #[test]
    fn test_from_json_rejects_zone_four() {
        let json = r#"{
            "wind_speed_mph": 175.0,
            "mean_roof_height_ft": 30.0,
            "exposure": "C",
            "roof_zone": 4,
            "tile_length_in": 17.0,
            "tile_width_in": 12.0,
            "lift_coefficient": 0.2
        }"#;
        let err = TileUpliftInput::from_json(json).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.is_recoverable());
        assert!(err.as_validation().unwrap().has_field("roof_zone"));
    }

    #[test]
    fn test_from_json_missing_and_mistyped_fields() {
        let json = r#"{
            "wind_speed_mph": "fast",
            "mean_roof_height_ft": 30.0,
            "exposure": "B",
            "roof_zone": 2.5,
            "tile_width_in": 12.0,
            "lift_coefficient": null,
            "kd_override": "high"
        }"#;
        let err = TileUpliftInput::from_json(json).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(
            err.as_validation().unwrap().fields(),
            vec![
                "wind_speed_mph",
                "exposure",
                "roof_zone",
                "tile_length_in",
                "lift_coefficient",
                "kd_override",
            ]
        );
    }

    #[test]
    fn test_from_json_optional_null_is_absent() {
        let json = r#"{
            "wind_speed_mph": 175.0,
            "mean_roof_height_ft": 30.0,
            "exposure": "c",
            "roof_zone": 3,
            "tile_length_in": 17.0,
            "tile_width_in": 12.0,
            "lift_coefficient": 0.2,
            "provided_resistance_ftlbf": null,
            "kd_override": -0.5
        }"#;
        let input = TileUpliftInput::from_json(json).unwrap();
        assert_eq!(input.exposure, ExposureCategory::C);
        assert_eq!(input.provided_resistance_ftlbf, None);
        assert_eq!(input.kd_override, Some(-0.5));
    }

    #[test]
    fn test_from_json_malformed_is_serialization_error() {
        for json in ["{", "[1, 2]", "42"] {
            let err = TileUpliftInput::from_json(json).unwrap_err();
            assert_eq!(err.error_code(), "SERIALIZATION_ERROR", "{}", json);
            assert!(!err.is_recoverable());
        }
    }

    #[test]
    fn test_from_json_rejects_negative_height() {
        let json = r#"{
            "wind_speed_mph": 175.0,
            "mean_roof_height_ft": -30.0,
            "exposure": "D",
            "roof_zone": 1,
            "tile_length_in": 17.0,
            "tile_width_in": 12.0,
            "lift_coefficient": 0.2
        }"#;
        let err = TileUpliftInput::from_json(json).unwrap_err();
        assert!(err.as_validation().unwrap().has_field("mean_roof_height_ft"));
    }

    #[test]
    fn test_applicability_notes() {
        let mut input = golden_input();
        input.tile_length_in = 24.0;
        input.tile_width_in = 6.0;
        let result = calculate(&input).unwrap();

        let params: Vec<&str> = result.applicability.iter().map(|n| n.parameter.as_str()).collect();
        assert_eq!(params, vec!["tile_length_in", "tile_width_in"]);
        // Values in the field's own units
        assert_eq!(result.applicability[0].value, 24.0);
        assert_eq!(result.applicability[1].value, 6.0);
        // Advisory only
        assert!(result.verdict().is_some());
    }

    #[test]
    fn test_height_above_limit_is_advisory() {
        let mut tall = golden_input();
        tall.mean_roof_height_ft = 60.0;
        let result = calculate(&tall).unwrap();

        assert_eq!(result.applicability.len(), 1);
        assert_eq!(result.applicability[0].parameter, "mean_roof_height_ft");
        assert_eq!(result.applicability[0].value, 60.0);

        // Ma uses the ordinary equation with Kz at 60 ft (1.13)
        assert_eq!(result.kz, 1.13);
        let qh = 0.00256 * 1.13 * 0.85 * 175.0 * 175.0;
        let expected_ma = qh * 2.0 * 0.2 * 0.85 * 1.0 * 0.76 * 17.0 / 12.0;
        assert!((result.ma_ftlbf - expected_ma).abs() < 1e-9);
        // 27.57 ft-lbf against Mf = 27.8
        assert_eq!(result.verdict(), Some(Verdict::Pass));

        // At the limit, no note
        tall.mean_roof_height_ft = MEAN_ROOF_HEIGHT_LIMIT_FT;
        assert!(calculate(&tall).unwrap().applicability.is_empty());
    }

    #[test]
    fn test_breakdown_order() {
        let result = calculate(&golden_input()).unwrap();
        let symbols: Vec<&str> = result.breakdown().iter().map(|row| row.symbol).collect();
        assert_eq!(symbols, vec!["qh", "Kz", "GCp", "Kd", "CL", "b", "L", "La", "Mf"]);
    }
}
