use crate::money::Micros;
use crate::types::PricingError;

/// Order total: `quantity * (base_price + options_incremental_total)`.
///
/// Option surcharges are part of the per-unit rate, so they scale with
/// quantity. No rounding happens here; cents are a display concern.
///
/// Rejects a negative quantity or negative price with `InvalidAmount` and an
/// unrepresentable product with `Overflow`.
pub fn compute_total(
    quantity: i64,
    base_price: Micros,
    options_incremental_total: Micros,
) -> Result<Micros, PricingError> {
    if quantity < 0 {
        return Err(PricingError::InvalidAmount {
            field: "quantity",
            raw: quantity,
        });
    }
    if base_price.is_negative() {
        return Err(PricingError::InvalidAmount {
            field: "base_price",
            raw: base_price.raw(),
        });
    }
    if options_incremental_total.is_negative() {
        return Err(PricingError::InvalidAmount {
            field: "options_incremental_total",
            raw: options_incremental_total.raw(),
        });
    }

    let unit_rate = base_price
        .checked_add(options_incremental_total)
        .ok_or(PricingError::Overflow)?;
    unit_rate.checked_mul_qty(quantity).ok_or(PricingError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const M: i64 = 1_000_000;

    #[test]
    fn options_scale_with_quantity() {
        // 2 * (5.00 + 0.50 + 0.00)
        let total = compute_total(2, Micros::new(5 * M), Micros::new(M / 2)).unwrap();
        assert_eq!(total, Micros::new(11 * M));
    }

    #[test]
    fn matches_closed_form_over_full_quantity_range() {
        let base = Micros::new(5 * M);
        for extra in [0, M / 2, M, 3 * M / 2, 2 * M] {
            for q in 1..=100_i64 {
                let total = compute_total(q, base, Micros::new(extra)).unwrap();
                assert_eq!(total.raw(), q * (5 * M + extra), "q={q} extra={extra}");
            }
        }
    }

    #[test]
    fn zero_quantity_is_free() {
        assert_eq!(compute_total(0, Micros::new(5 * M), Micros::ZERO), Ok(Micros::ZERO));
    }

    #[test]
    fn negative_quantity_is_rejected() {
        assert_eq!(
            compute_total(-1, Micros::new(5 * M), Micros::ZERO),
            Err(PricingError::InvalidAmount {
                field: "quantity",
                raw: -1
            })
        );
    }

    #[test]
    fn negative_prices_are_rejected() {
        assert!(matches!(
            compute_total(1, Micros::new(-1), Micros::ZERO),
            Err(PricingError::InvalidAmount {
                field: "base_price",
                ..
            })
        ));
        assert!(matches!(
            compute_total(1, Micros::ZERO, Micros::new(-1)),
            Err(PricingError::InvalidAmount {
                field: "options_incremental_total",
                ..
            })
        ));
    }

    #[test]
    fn overflow_is_reported_not_wrapped() {
        assert_eq!(
            compute_total(i64::MAX, Micros::new(5 * M), Micros::ZERO),
            Err(PricingError::Overflow)
        );
    }
}
