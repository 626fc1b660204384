//! Strain energy from the modal expansion
//!
//! Total bending strain energy follows in closed form from the modal
//! amplitudes - no spatial integration grid is involved. Each odd-odd mode
//! contributes a non-negative amount, so the energy grows monotonically
//! with the truncation order toward the converged value.

use std::f64::consts::PI;

use crate::error::{PlateError, PlateResult};
use crate::model::PlateModel;

/// Total bending strain energy in J at truncation order `order`
///
/// ```text
/// energy = (D/2) · (a·b/4) · Σ_{m,n odd ≤ N} Wmn² · [(mπ/a)² + (nπ/b)²]²
/// Wmn    = 16·q0 / (D·π⁶·m·n·[(mπ/a)² + (nπ/b)²]²)
/// ```
pub fn accumulate_energy(model: &PlateModel, order: usize) -> PlateResult<f64> {
    if order == 0 {
        return Err(PlateError::InvalidTruncationOrder);
    }

    let d = model.flexural_rigidity();
    let modal_sum: f64 = (1..=order)
        .step_by(2)
        .flat_map(|m| {
            (1..=order).step_by(2).map(move |n| {
                let denom = ((m as f64 * PI / model.a).powi(2)
                    + (n as f64 * PI / model.b).powi(2))
                .powi(2);
                debug_assert!(denom > 0.0, "mode denominator cannot vanish for m, n >= 1");
                let wmn = 16.0 * model.q0 / (d * PI.powi(6) * (m * n) as f64 * denom);
                wmn * wmn * denom
            })
        })
        .sum();

    Ok(d / 2.0 * modal_sum * model.a * model.b / 4.0)
}

/// Strain energy for each truncation order in `orders`, for convergence
/// comparison
pub fn energy_convergence(
    model: &PlateModel,
    orders: &[usize],
) -> PlateResult<Vec<(usize, f64)>> {
    orders
        .iter()
        .map(|&n| accumulate_energy(model, n).map(|e| (n, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_energy_is_positive() {
        let model = PlateModel::steel();
        assert!(accumulate_energy(&model, 1).unwrap() > 0.0);
    }

    #[test]
    fn test_energy_is_monotone_in_order() {
        let model = PlateModel::steel();
        let mut previous = 0.0;
        for order in 1..=12 {
            let energy = accumulate_energy(&model, order).unwrap();
            assert!(
                energy >= previous,
                "energy decreased from {previous} to {energy} at order {order}"
            );
            previous = energy;
        }
    }

    #[test]
    fn test_even_orders_add_nothing() {
        // An even order admits no new odd-odd modes over the preceding odd one
        let model = PlateModel::steel();
        let e1 = accumulate_energy(&model, 1).unwrap();
        let e2 = accumulate_energy(&model, 2).unwrap();
        assert_eq!(e1, e2);
    }

    #[test]
    fn test_fundamental_mode_energy() {
        let model = PlateModel::steel();
        let d = model.flexural_rigidity();
        let denom = ((PI / model.a).powi(2) + (PI / model.b).powi(2)).powi(2);
        let w11 = 16.0 * model.q0 / (d * PI.powi(6) * denom);
        let expected = d / 2.0 * (w11 * w11 * denom) * model.a * model.b / 4.0;
        assert_relative_eq!(
            accumulate_energy(&model, 1).unwrap(),
            expected,
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_convergence_sweep_matches_single_calls() {
        let model = PlateModel::steel();
        let sweep = energy_convergence(&model, &[2, 4, 6]).unwrap();
        assert_eq!(sweep.len(), 3);
        for (order, energy) in sweep {
            assert_eq!(energy, accumulate_energy(&model, order).unwrap());
        }
    }

    #[test]
    fn test_zero_order_is_rejected() {
        let model = PlateModel::steel();
        assert!(matches!(
            accumulate_energy(&model, 0),
            Err(PlateError::InvalidTruncationOrder)
        ));
        assert!(energy_convergence(&model, &[2, 0]).is_err());
    }
}
