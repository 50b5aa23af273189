//! # uplift_core - Rigid Roof Tile Wind Uplift Engine
//!
//! `uplift_core` estimates the wind-induced uplift moment on a rigid roof
//! tile and checks it against the tile's rated resistance, following
//! ASCE 7-22 (velocity pressure and coefficients) and FBC 2023 Section
//! 1609.6.3 (rigid tile uplift moment).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All inputs, results and errors implement Serialize
//! - **Rich Errors**: Validation lists every bad field, not just the first
//!
//! ## Quick Start
//!
//! ```rust
//! use uplift_core::calculations::TileUpliftForm;
//! use uplift_core::compute_uplift_moment;
//!
//! let input = TileUpliftForm::default().parse().unwrap();
//! let result = compute_uplift_moment(&input).unwrap();
//!
//! println!("Ma = {:.2} ft-lbf", result.ma_ftlbf);
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Tile uplift input, result and calculation
//! - [`coefficients`] - Kz, GCp and Kd resolution
//! - [`equations`] - Governing formulas and the equation registry
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod coefficients;
pub mod equations;
pub mod errors;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::tile_uplift::calculate as compute_uplift_moment;
pub use calculations::{TileUpliftForm, TileUpliftInput, TileUpliftResult, Verdict};
pub use coefficients::{CoefficientSet, ExposureCategory, RoofZone};
pub use errors::{CalcError, CalcResult, FieldIssue, ValidationError};
