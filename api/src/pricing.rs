//! Quote computation for the booking wizard.
//!
//! Prices are whole CAD dollars end to end. Rounding happens in two steps:
//! the discounted subtotal is rounded first, then tax is computed on that
//! rounded figure and rounded again. Collapsing the two steps into one
//! formula changes totals by a dollar on some inputs.

use crate::catalog;
use crate::catalog::Frequency;
use serde::Deserialize;
use serde::Serialize;

/// Québec sales tax: 5% GST + 9.975% QST.
pub const TAX_RATE: f64 = 0.14975;

/// A fully computed price quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub subtotal: i64,
    pub tax: i64,
    pub total: i64,
}

/// Rounds a discounted amount to the nearest whole dollar.
fn round_dollars(amount: f64) -> i64 {
    amount.round() as i64
}

pub fn subtotal(base_price: i64, addon_sum: i64, frequency: Frequency) -> i64 {
    round_dollars((base_price + addon_sum) as f64 * frequency.multiplier())
}

pub fn tax(subtotal: i64) -> i64 {
    round_dollars(subtotal as f64 * TAX_RATE)
}

/// Computes the quote for a base price, a set of addon prices and a visit
/// frequency.
pub fn quote(base_price: i64, addon_sum: i64, frequency: Frequency) -> Quote {
    let subtotal = subtotal(base_price, addon_sum, frequency);
    let tax = tax(subtotal);
    Quote {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

/// Convenience over [`quote`] that resolves catalog ids. Unknown addon ids
/// contribute nothing, matching the wizard's behavior of only ever holding
/// ids it got from the catalog.
pub fn quote_for(service_id: &str, addon_ids: &[String], frequency: Frequency) -> Option<Quote> {
    let service = catalog::service(service_id)?;
    let addon_sum = addon_ids
        .iter()
        .filter_map(|id| catalog::addon(id))
        .map(|a| a.price)
        .sum();
    Some(quote(service.base_price, addon_sum, frequency))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekly_residential_no_addons() {
        // 120 * 0.85 = 102; 102 * 0.14975 = 15.27 -> 15
        let q = quote(120, 0, Frequency::Weekly);
        assert_eq!(q.subtotal, 102);
        assert_eq!(q.tax, 15);
        assert_eq!(q.total, 117);
    }

    #[test]
    fn monthly_commercial_with_windows() {
        // (200 + 30) * 0.95 = 218.5 -> 219; 219 * 0.14975 = 32.79 -> 33
        let q = quote(200, 30, Frequency::Monthly);
        assert_eq!(q.subtotal, 219);
        assert_eq!(q.tax, 33);
        assert_eq!(q.total, 252);
    }

    #[test]
    fn one_time_is_undiscounted() {
        let q = quote(180, 50, Frequency::OneTime);
        assert_eq!(q.subtotal, 230);
        assert_eq!(q.tax, 34);
        assert_eq!(q.total, 264);
    }

    #[test]
    fn tax_applies_to_the_rounded_subtotal() {
        // 218.5 rounds up to 219 before tax. A single combined formula
        // would tax 218.5 and come out a dollar short on some inputs.
        assert_eq!(subtotal(200, 30, Frequency::BiWeekly), 207);
        assert_eq!(tax(207), 31);
        let q = quote(200, 30, Frequency::BiWeekly);
        assert_eq!(q.total, q.subtotal + q.tax);
    }

    #[test]
    fn quote_for_resolves_catalog_ids() {
        let q = quote_for(
            "commercial",
            &["windows".to_string()],
            Frequency::Monthly,
        )
        .unwrap();
        assert_eq!(q.total, 252);
        assert!(quote_for("industrial", &[], Frequency::OneTime).is_none());
    }

    #[test]
    fn unknown_addons_contribute_nothing() {
        let q = quote_for("residential", &["chimney".to_string()], Frequency::OneTime).unwrap();
        assert_eq!(q.subtotal, 120);
    }
}
