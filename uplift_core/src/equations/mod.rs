//! # Wind Uplift Equations
//!
//! The equations behind the rigid tile check live here so they can be
//! verified against the code references in one place.
//!
//! ## Modules
//!
//! - [`wind`] - Velocity pressure, tile geometry and uplift moment
//! - [`registry`] - Equation metadata and EQUATIONS.md generation
//!
//! ## References
//!
//! - ASCE 7-22: Minimum Design Loads and Associated Criteria for Buildings
//! - FBC 2023: Florida Building Code, Building, Section 1609.6.3

pub mod registry;
pub mod wind;

pub use wind::{
    aerodynamic_uplift_moment,
    moment_arm,
    resistance_sufficient,
    tile_dimension,
    velocity_pressure,
    KZT,
    MOMENT_ARM_RATIO,
    VELOCITY_PRESSURE_CONSTANT,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
    tile_uplift_equations,
};
