//! Navier Plate - series solution for simply supported rectangular plates
//!
//! This library computes the classical Navier (double sine series) solution
//! for static bending of an isotropic thin rectangular plate, simply
//! supported on all four edges, under a uniform transverse load:
//! - Modal coefficient generation for a chosen truncation order
//! - Displacement and moment reconstruction at arbitrary plate coordinates
//! - Through-thickness bending stresses with a von Mises combination
//! - Closed-form total strain energy, per truncation order
//!
//! Every operation is a pure function of the plate parameters, the
//! truncation order, and the coordinates; evaluations at distinct points
//! are independent and may run concurrently.
//!
//! ## Example
//! ```rust
//! use navier_plate::prelude::*;
//!
//! // 0.5 m square steel plate, 4 mm thick, under 1 kPa
//! let model = PlateModel::steel();
//!
//! // Truncate the series at N = 6 (odd modes up to m, n = 5)
//! let table = generate_coefficients(&model, 6).unwrap();
//!
//! // Displacement and moments at the plate center
//! let center = evaluate_field(&table, &model, model.a / 2.0, model.b / 2.0);
//! assert!(center.w > 0.0);
//!
//! // Bending stresses at the top fiber
//! let top = derive_stress(&center, model.h, model.h / 2.0);
//! assert!(top.von_mises > 0.0);
//!
//! // Total strain energy stored in the plate
//! let energy = accumulate_energy(&model, 6).unwrap();
//! assert!(energy > 0.0);
//! ```

pub mod energy;
pub mod error;
pub mod field;
pub mod model;
pub mod series;
pub mod stress;

// Re-export common types
pub mod prelude {
    pub use crate::energy::{accumulate_energy, energy_convergence};
    pub use crate::error::{PlateError, PlateResult};
    pub use crate::field::{evaluate_field, FieldSample};
    pub use crate::model::PlateModel;
    pub use crate::series::{generate_coefficients, CoefficientTable};
    pub use crate::stress::{derive_stress, StressState};
}
