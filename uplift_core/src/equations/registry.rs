//! # Equation Registry
//!
//! Every equation used by the uplift check, with its code reference,
//! formula, variables and the function that implements it.
//!
//! ## Usage
//!
//! ```rust
//! use uplift_core::equations::registry::{Equation, EquationCategory};
//!
//! let meta = Equation::UpliftMoment.metadata();
//! assert_eq!(meta.category, EquationCategory::UpliftMoment);
//! println!("Formula: {}", meta.formula_plain);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to the standard an equation comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// ASCE 7 - Minimum Design Loads for Buildings
    ASCE7 { year: u16, section: &'static str },
    /// Florida Building Code, Building volume
    FBC { year: u16, section: &'static str },
    /// Unit conversion or statics, no code reference needed
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::ASCE7 { year, section } => {
                format!("ASCE 7-{} {}", year % 100, section)
            }
            CodeReference::FBC { year, section } => {
                format!("FBC {} {}", year, section)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::ASCE7 { .. } => "ASCE 7",
            CodeReference::FBC { .. } => "FBC",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Kz, GCp, Kd
    Coefficients,
    /// Velocity pressure qh
    WindPressure,
    /// b, L, La
    TileGeometry,
    /// Ma
    UpliftMoment,
    /// Mf >= Ma
    DesignChecks,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Coefficients => "Coefficients",
            EquationCategory::WindPressure => "Wind Pressure",
            EquationCategory::TileGeometry => "Tile Geometry",
            EquationCategory::UpliftMoment => "Uplift Moment",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }

    /// Sort order in the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Coefficients => 1,
            EquationCategory::WindPressure => 2,
            EquationCategory::TileGeometry => 3,
            EquationCategory::UpliftMoment => 4,
            EquationCategory::DesignChecks => 5,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    pub symbol: &'static str,
    pub description: &'static str,
    /// Empty for dimensionless quantities
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Everything needed to document and audit one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    pub name: &'static str,
    pub description: &'static str,
    /// Plain-text formula
    pub formula_plain: &'static str,
    pub reference: CodeReference,
    pub variables: Vec<Variable>,
    pub assumptions: Vec<&'static str>,
    pub category: EquationCategory,
    /// Source file, relative to `uplift_core/src`
    pub source_module: &'static str,
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used in the rigid tile uplift check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// Kz from Table 26.10-1
    ExposureCoefficient,
    /// GCp by roof zone
    RoofPressureCoefficient,
    /// Kd default
    DirectionalityFactor,
    /// qh = 0.00256 Kz Kzt Kd Vult^2
    VelocityPressure,
    /// b = width/12, L = length/12
    TileDimensions,
    /// La = 0.76 L
    MomentArm,
    /// Ma = |qh GCp CL Kd b La|
    UpliftMoment,
    /// Mf >= Ma
    ResistanceCheck,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::ExposureCoefficient => EquationMetadata {
                name: "Velocity Pressure Exposure Coefficient",
                description: "Kz at mean roof height, linear between tabulated heights",
                formula_plain: "Kz = Table 26.10-1(exposure, h)",
                reference: CodeReference::ASCE7 { year: 2022, section: "Table 26.10-1" },
                variables: vec![
                    Variable::new("Kz", "Velocity pressure exposure coefficient", ""),
                    Variable::new("h", "Mean roof height", "ft"),
                ],
                assumptions: vec![
                    "Exposure C or D",
                    "h <= 15 ft uses the 15 ft row",
                    "h > 500 ft uses the 500 ft row",
                ],
                category: EquationCategory::Coefficients,
                source_module: "coefficients/exposure.rs",
                source_function: "ExposureCategory::kz",
            },

            Equation::RoofPressureCoefficient => EquationMetadata {
                name: "Roof Pressure Coefficient",
                description: "External pressure coefficient by roof zone unless overridden",
                formula_plain: "GCp = override or {1: -0.9, 2: -1.3, 3: -2.0}[zone]",
                reference: CodeReference::ASCE7 { year: 2022, section: "Chapter 30" },
                variables: vec![
                    Variable::new("GCp", "External pressure coefficient", ""),
                    Variable::new("zone", "Roof zone (1 interior, 2 edge, 3 corner)", ""),
                ],
                assumptions: vec!["Negative values are suction", "Overrides are used verbatim"],
                category: EquationCategory::Coefficients,
                source_module: "coefficients/roof_zone.rs",
                source_function: "RoofZone::default_gcp",
            },

            Equation::DirectionalityFactor => EquationMetadata {
                name: "Wind Directionality Factor",
                description: "Kd for components and cladding unless overridden",
                formula_plain: "Kd = override or 0.85",
                reference: CodeReference::ASCE7 { year: 2022, section: "Table 26.6-1" },
                variables: vec![Variable::new("Kd", "Wind directionality factor", "")],
                assumptions: vec!["Overrides are used verbatim"],
                category: EquationCategory::Coefficients,
                source_module: "coefficients/mod.rs",
                source_function: "CoefficientSet::resolve",
            },

            Equation::VelocityPressure => EquationMetadata {
                name: "Velocity Pressure",
                description: "Dynamic wind pressure at mean roof height",
                formula_plain: "qh = 0.00256 * Kz * Kzt * Kd * Vult^2",
                reference: CodeReference::ASCE7 { year: 2022, section: "Eq. 26.10-1" },
                variables: vec![
                    Variable::new("qh", "Velocity pressure at mean roof height", "psf"),
                    Variable::new("Kzt", "Topographic factor", ""),
                    Variable::new("Vult", "Ultimate design wind speed", "mph"),
                ],
                assumptions: vec!["Kzt = 1.0 (no topographic speed-up)"],
                category: EquationCategory::WindPressure,
                source_module: "equations/wind.rs",
                source_function: "velocity_pressure",
            },

            Equation::TileDimensions => EquationMetadata {
                name: "Tile Dimensions",
                description: "Tile width and length converted from inches to feet",
                formula_plain: "b = width / 12, L = length / 12",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("b", "Exposed tile width", "ft"),
                    Variable::new("L", "Tile length", "ft"),
                ],
                assumptions: vec![],
                category: EquationCategory::TileGeometry,
                source_module: "equations/wind.rs",
                source_function: "tile_dimension",
            },

            Equation::MomentArm => EquationMetadata {
                name: "Moment Arm",
                description: "Distance from the axis of rotation to the point of uplift",
                formula_plain: "La = 0.76 * L",
                reference: CodeReference::FBC { year: 2023, section: "Section 1609.6.3" },
                variables: vec![
                    Variable::new("La", "Moment arm", "ft"),
                    Variable::new("L", "Tile length", "ft"),
                ],
                assumptions: vec!["Tile rotates about its head"],
                category: EquationCategory::TileGeometry,
                source_module: "equations/wind.rs",
                source_function: "moment_arm",
            },

            Equation::UpliftMoment => EquationMetadata {
                name: "Aerodynamic Uplift Moment",
                description: "Wind-induced moment tending to lift the tile about its head",
                formula_plain: "Ma = |qh * GCp * CL * Kd * b * La|",
                reference: CodeReference::FBC { year: 2023, section: "Section 1609.6.3, Eq. 16-18" },
                variables: vec![
                    Variable::new("Ma", "Aerodynamic uplift moment", "ft-lbf"),
                    Variable::new("CL", "Lift coefficient", ""),
                    Variable::new("b", "Exposed tile width", "ft"),
                    Variable::new("La", "Moment arm", "ft"),
                ],
                assumptions: vec![
                    "Reported as a magnitude",
                    "Mean roof height h <= 40 ft",
                    "Tile length 1.0-1.75 ft and exposed width 0.67-1.25 ft",
                ],
                category: EquationCategory::UpliftMoment,
                source_module: "equations/wind.rs",
                source_function: "aerodynamic_uplift_moment",
            },

            Equation::ResistanceCheck => EquationMetadata {
                name: "Resistance Check",
                description: "Tile passes when its rated resistance meets the uplift moment",
                formula_plain: "Pass if Mf >= Ma",
                reference: CodeReference::FBC { year: 2023, section: "Section 1609.6.3" },
                variables: vec![
                    Variable::new("Mf", "Provided resistance", "ft-lbf"),
                    Variable::new("Ma", "Aerodynamic uplift moment", "ft-lbf"),
                ],
                assumptions: vec!["Only evaluated when Mf is supplied"],
                category: EquationCategory::DesignChecks,
                source_module: "equations/wind.rs",
                source_function: "resistance_sufficient",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// All categories in document order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![UpliftMoment, Coefficients, DesignChecks, WindPressure, TileGeometry];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::ExposureCoefficient,
    Equation::RoofPressureCoefficient,
    Equation::DirectionalityFactor,
    Equation::VelocityPressure,
    Equation::TileDimensions,
    Equation::MomentArm,
    Equation::UpliftMoment,
    Equation::ResistanceCheck,
];

/// Equations applied by a tile uplift calculation, in evaluation order.
///
/// The resistance check only applies when a resistance was supplied.
pub fn tile_uplift_equations(with_resistance: bool) -> Vec<Equation> {
    let mut equations = vec![
        Equation::ExposureCoefficient,
        Equation::RoofPressureCoefficient,
        Equation::DirectionalityFactor,
        Equation::VelocityPressure,
        Equation::TileDimensions,
        Equation::MomentArm,
        Equation::UpliftMoment,
    ];
    if with_resistance {
        equations.push(Equation::ResistanceCheck);
    }
    equations
}

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

/// Generate the EQUATIONS.md reference document.
///
/// # Example
///
/// ```rust
/// use uplift_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Tile Uplift Equations Reference"));
/// assert!(markdown.contains("## Wind Pressure"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(
        r#"# Tile Uplift Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

Every formula used by the rigid roof tile uplift check, with its code
reference, source location and assumptions.

## Sign Conventions

| Quantity | Convention |
|----------|------------|
| GCp | Negative for suction (away from the roof surface) |
| Ma | Reported as a magnitude |

---

"#,
    );

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    let units = if var.units.is_empty() { "-" } else { var.units };
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================
