//! Modal coefficient generation for the Navier double-sine series
//!
//! A uniformly loaded, simply supported rectangular plate excites only the
//! odd-odd harmonics of the double sine expansion. The table holds the
//! amplitude of every mode pair (m, n) up to the truncation order; even
//! modes are stored as exact zeros so the table shape stays N x N.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{PlateError, PlateResult};
use crate::model::PlateModel;

/// Truncated table of modal amplitudes for the double sine series
///
/// Indexed by mode pair (m, n) with `1 <= m, n <= order`. Entries for pairs
/// where either index is even are exactly zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientTable {
    order: usize,
    coeffs: DMatrix<f64>,
}

impl CoefficientTable {
    /// Truncation order N (maximum mode index in each direction)
    pub fn order(&self) -> usize {
        self.order
    }

    /// Amplitude of mode pair (m, n), 1-based
    ///
    /// # Panics
    /// Panics if `m` or `n` is outside `1..=order`.
    pub fn get(&self, m: usize, n: usize) -> f64 {
        self.coeffs[(m - 1, n - 1)]
    }

    /// Iterate the nonzero terms as (m, n, amplitude), row by row
    ///
    /// Skipping the zero entries is a shortcut only: every skipped term
    /// contributes exactly zero to any series sum, so consumers of this
    /// iterator produce the same result as a full N x N summation.
    pub fn terms(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (1..=self.order).flat_map(move |m| {
            (1..=self.order).filter_map(move |n| {
                let c = self.get(m, n);
                (c != 0.0).then_some((m, n, c))
            })
        })
    }

    /// Number of nonzero modes in the table
    pub fn nonzero_modes(&self) -> usize {
        self.terms().count()
    }
}

/// Generate the coefficient table for a plate at truncation order `order`
///
/// Each odd-odd mode pair receives the standard Navier amplitude for a
/// uniform load:
///
/// ```text
/// c(m, n) = 16·q0·a⁴ / (D·π⁶·m·n·(m² + n²)²)
/// ```
///
/// Amplitudes decay as O(1/(m·n·(m²+n²)²)), so the series converges; the
/// table is exact for the chosen truncation and the only approximation is
/// the truncation itself.
pub fn generate_coefficients(model: &PlateModel, order: usize) -> PlateResult<CoefficientTable> {
    if order == 0 {
        return Err(PlateError::InvalidTruncationOrder);
    }

    let d = model.flexural_rigidity();
    let mut coeffs = DMatrix::zeros(order, order);
    for m in 1..=order {
        for n in 1..=order {
            if m % 2 == 1 && n % 2 == 1 {
                let denom = ((m * m + n * n) as f64).powi(2);
                debug_assert!(denom > 0.0, "mode denominator cannot vanish for m, n >= 1");
                coeffs[(m - 1, n - 1)] = 16.0 * model.q0 * model.a.powi(4)
                    / (d * PI.powi(6) * (m * n) as f64 * denom);
            }
        }
    }

    let table = CoefficientTable { order, coeffs };
    log::debug!(
        "generated {0}x{0} coefficient table ({1} nonzero modes)",
        order,
        table.nonzero_modes()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_even_modes_are_exactly_zero() {
        let model = PlateModel::steel();
        let table = generate_coefficients(&model, 6).unwrap();
        for m in 1..=6 {
            for n in 1..=6 {
                if m % 2 == 0 || n % 2 == 0 {
                    assert_eq!(table.get(m, n), 0.0, "mode ({m}, {n}) should be zero");
                } else {
                    assert!(table.get(m, n) > 0.0, "mode ({m}, {n}) should be positive");
                }
            }
        }
    }

    #[test]
    fn test_fundamental_mode_amplitude() {
        let model = PlateModel::steel();
        let table = generate_coefficients(&model, 2).unwrap();
        let d = model.flexural_rigidity();
        let expected = 16.0 * model.q0 * model.a.powi(4) / (d * PI.powi(6) * 4.0);
        assert_relative_eq!(table.get(1, 1), expected, max_relative = 1e-15);
    }

    #[test]
    fn test_order_two_table_has_single_mode() {
        let model = PlateModel::steel();
        let table = generate_coefficients(&model, 2).unwrap();
        assert_eq!(table.order(), 2);
        assert_eq!(table.nonzero_modes(), 1);
        assert_eq!(table.get(1, 2), 0.0);
        assert_eq!(table.get(2, 1), 0.0);
        assert_eq!(table.get(2, 2), 0.0);
    }

    #[test]
    fn test_mode_count_grows_with_order() {
        let model = PlateModel::steel();
        // N = 4 adds (1,3), (3,1), (3,3); N = 6 adds the pairs with index 5
        assert_eq!(generate_coefficients(&model, 4).unwrap().nonzero_modes(), 4);
        assert_eq!(generate_coefficients(&model, 6).unwrap().nonzero_modes(), 9);
    }

    #[test]
    fn test_square_plate_table_is_symmetric() {
        let model = PlateModel::steel();
        let table = generate_coefficients(&model, 6).unwrap();
        for m in 1..=6 {
            for n in 1..=6 {
                assert_eq!(table.get(m, n), table.get(n, m));
            }
        }
    }

    #[test]
    fn test_zero_order_is_rejected() {
        let model = PlateModel::steel();
        assert!(matches!(
            generate_coefficients(&model, 0),
            Err(PlateError::InvalidTruncationOrder)
        ));
    }
}
