//! # Uplift Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`tile_uplift`] - Rigid roof tile aerodynamic uplift moment
//! - [`form`] - Text-form front end for [`tile_uplift`]

pub mod form;
pub mod tile_uplift;

pub use form::TileUpliftForm;
pub use tile_uplift::{
    ApplicabilityNote,
    BreakdownRow,
    ResistanceCheck,
    TileUpliftInput,
    TileUpliftResult,
    Verdict,
};
