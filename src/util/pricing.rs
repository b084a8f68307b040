//! Glass cost estimation.
//!
//! The glass cost is `area * price per square meter`, with dimensions
//! supplied in centimeters. It is distinct from the admin-entered final
//! price: the difference between the two is the labor portion, which is
//! only ever displayed, never stored.

use crate::util::money::{cents_to_major, to_cents_half_up};

/// Cost of the glass alone: `(height_cm / 100) * (width_cm / 100) * price_per_m2`.
///
/// Full precision is kept here; rounding to cents happens at the display
/// boundary only.
pub fn compute_glass_cost(height_cm: f64, width_cm: f64, price_per_m2: f64) -> f64 {
    (height_cm / 100.0) * (width_cm / 100.0) * price_per_m2
}

/// Glass cost in integer cents for a record whose glass type may not
/// resolve. An unknown price makes the whole term unknown (`None`), while
/// absent dimensions are treated as zero.
pub fn glass_cost_cents(
    height_cm: Option<f64>,
    width_cm: Option<f64>,
    price_per_m2_cents: Option<i64>,
) -> Option<i64> {
    let price = cents_to_major(price_per_m2_cents?);
    let cost = compute_glass_cost(height_cm.unwrap_or(0.0), width_cm.unwrap_or(0.0), price);
    Some(to_cents_half_up(cost))
}

/// Labor portion shown on documents: final price minus glass cost, known
/// only when both operands are known.
pub fn labor_cents(final_price_cents: Option<i64>, glass_cost_cents: Option<i64>) -> Option<i64> {
    Some(final_price_cents? - glass_cost_cents?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula() {
        // 100 cm x 50 cm at R$ 80,00/m2 -> 1.0 m * 0.5 m * 80 = R$ 40,00
        let cost = compute_glass_cost(100.0, 50.0, 80.0);
        assert!((cost - 40.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_dimension_gives_zero() {
        assert_eq!(compute_glass_cost(0.0, 50.0, 80.0), 0.0);
        assert_eq!(compute_glass_cost(100.0, 0.0, 80.0), 0.0);
        assert_eq!(glass_cost_cents(None, Some(50.0), Some(8000)), Some(0));
        assert_eq!(glass_cost_cents(Some(100.0), None, Some(8000)), Some(0));
    }

    #[test]
    fn test_unresolved_glass_type_is_unknown() {
        assert_eq!(glass_cost_cents(Some(100.0), Some(50.0), None), None);
    }

    #[test]
    fn test_labor_breakdown() {
        // final R$ 450,00, glass R$ 40,00 -> labor R$ 410,00
        let glass = glass_cost_cents(Some(100.0), Some(50.0), Some(8000));
        assert_eq!(glass, Some(4000));
        assert_eq!(labor_cents(Some(45000), glass), Some(41000));
        assert_eq!(labor_cents(None, glass), None);
        assert_eq!(labor_cents(Some(45000), None), None);
    }

    #[test]
    fn test_fractional_precision() {
        // 123.4 cm x 56.7 cm at R$ 97,53/m2
        let expected = (123.4 / 100.0) * (56.7 / 100.0) * 97.53;
        let cost = compute_glass_cost(123.4, 56.7, 97.53);
        assert!((cost - expected).abs() < 1e-6);
        assert_eq!(
            glass_cost_cents(Some(123.4), Some(56.7), Some(9753)),
            Some(to_cents_half_up(expected))
        );
    }
}
