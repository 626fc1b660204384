//! Through-thickness bending stresses and the von Mises combination

use serde::{Deserialize, Serialize};

use crate::field::FieldSample;

/// Plane-stress state at a through-thickness station of the plate
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StressState {
    /// Normal stress in the x direction in Pa
    pub sigma_xx: f64,
    /// Normal stress in the y direction in Pa
    pub sigma_yy: f64,
    /// In-plane shear stress in Pa
    pub sigma_xy: f64,
    /// Von Mises equivalent stress in Pa
    pub von_mises: f64,
    /// Maximum principal stress in Pa
    pub s1: f64,
    /// Minimum principal stress in Pa
    pub s2: f64,
}

impl StressState {
    /// Build the full state from plane-stress components
    pub fn from_components(sigma_xx: f64, sigma_yy: f64, sigma_xy: f64) -> Self {
        // Von Mises for plane stress
        let von_mises = (sigma_xx.powi(2) - sigma_xx * sigma_yy
            + sigma_yy.powi(2)
            + 3.0 * sigma_xy.powi(2))
        .sqrt();

        // Principal stresses
        let s_avg = (sigma_xx + sigma_yy) / 2.0;
        let r = ((sigma_xx - sigma_yy).powi(2) / 4.0 + sigma_xy.powi(2)).sqrt();

        Self {
            sigma_xx,
            sigma_yy,
            sigma_xy,
            von_mises,
            s1: s_avg + r,
            s2: s_avg - r,
        }
    }

    /// Demand-to-capacity ratio of the von Mises stress against a reference
    /// yield stress. Informational only - nothing in the solver enforces it.
    pub fn utilization(&self, yield_stress: f64) -> f64 {
        self.von_mises / yield_stress
    }
}

/// Bending stresses at height `z` above the mid-surface
///
/// Classical thin-plate relations, linear in z:
///
/// ```text
/// sigma_xx = −12·mx·z / h³
/// sigma_yy = −12·my·z / h³
/// sigma_xy = −12·mxy·z / h³
/// ```
///
/// Stresses are exactly zero at the mid-surface (z = 0) and extremal at
/// the fibers z = ±h/2.
pub fn derive_stress(sample: &FieldSample, h: f64, z: f64) -> StressState {
    let factor = -12.0 * z / h.powi(3);
    StressState::from_components(factor * sample.mx, factor * sample.my, factor * sample.mxy)
}
