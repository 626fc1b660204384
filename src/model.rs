//! Plate model - validated physical and geometric parameters

use serde::{Deserialize, Serialize};

use crate::error::{PlateError, PlateResult};

/// An isotropic thin rectangular plate, simply supported on all four edges,
/// carrying a uniform transverse pressure load
///
/// The plate occupies `0 <= x <= a`, `0 <= y <= b` with the load acting
/// normal to the mid-surface. All quantities are in SI base units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateModel {
    /// Side length along x in m
    pub a: f64,
    /// Side length along y in m
    pub b: f64,
    /// Thickness in m
    pub h: f64,
    /// Modulus of elasticity (Young's modulus) in Pa
    pub e: f64,
    /// Poisson's ratio
    pub nu: f64,
    /// Uniform load intensity in Pa
    pub q0: f64,
    /// Reference yield stress in Pa, used for reporting only - never enforced
    pub yield_stress: f64,
}

impl PlateModel {
    /// Create a new plate model, validating the physical parameters
    pub fn new(
        a: f64,
        b: f64,
        h: f64,
        e: f64,
        nu: f64,
        q0: f64,
        yield_stress: f64,
    ) -> PlateResult<Self> {
        if a <= 0.0 || b <= 0.0 {
            return Err(PlateError::InvalidSideLengths { a, b });
        }
        if h <= 0.0 {
            return Err(PlateError::InvalidThickness(h));
        }
        if e <= 0.0 {
            return Err(PlateError::InvalidModulus(e));
        }
        if !(0.0..0.5).contains(&nu) {
            return Err(PlateError::InvalidPoissonRatio(nu));
        }
        Ok(Self {
            a,
            b,
            h,
            e,
            nu,
            q0,
            yield_stress,
        })
    }

    /// A 0.5 m x 0.5 m x 4 mm structural steel plate under 1 kPa pressure
    pub fn steel() -> Self {
        Self {
            a: 0.5,
            b: 0.5,
            h: 0.004,
            e: 200e9,          // 200 GPa
            nu: 0.3,
            q0: 1000.0,        // 1 kPa
            yield_stress: 450e6, // 450 MPa
        }
    }

    /// Flexural rigidity D = E·h³ / (12·(1 − nu²))
    ///
    /// Every series coefficient, moment, and energy formula takes the plate
    /// bending stiffness from here.
    pub fn flexural_rigidity(&self) -> f64 {
        self.e * self.h.powi(3) / (12.0 * (1.0 - self.nu * self.nu))
    }
}
