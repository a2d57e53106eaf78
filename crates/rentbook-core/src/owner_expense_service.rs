//! Owner-borne fixed costs of a property.

use rentbook_domain::{OwnerExpenseBreakdown, Payer, Property};

/// Computes the annual taxes a property costs its owner.
pub struct OwnerExpenseService;

impl OwnerExpenseService {
    /// Returns the owner's annual IBI and garbage-tax cost for `property`.
    ///
    /// Annual costs are applied flat to whichever year is requested; they are
    /// not prorated by ownership period or occupancy.
    pub fn annual_cost(property: &Property, _fiscal_year: Option<i32>) -> f64 {
        Self::breakdown(property).total
    }

    /// Splits the owner's annual cost by tax.
    pub fn breakdown(property: &Property) -> OwnerExpenseBreakdown {
        let ibi = owner_share(property.who_pays_ibi, property.ibi_cost_annual);
        let garbage = owner_share(property.who_pays_garbage, property.garbage_tax_annual);
        OwnerExpenseBreakdown {
            ibi,
            garbage,
            total: ibi + garbage,
        }
    }
}

fn owner_share(payer: Option<Payer>, annual_cost: Option<f64>) -> f64 {
    match payer {
        Some(Payer::Owner) => annual_cost.filter(|cost| cost.is_finite()).unwrap_or(0.0),
        Some(Payer::Tenant) | None => 0.0,
    }
}
