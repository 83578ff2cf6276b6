use crate::catalog::RoleCatalog;
use serde::{Deserialize, Serialize};

/// Headcount-weighted average hourly rate across the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendedRate {
    /// Weighted average rate per hour; 0 when nobody is assigned.
    pub rate: f64,
    /// Sum of all assigned quantities.
    pub total_quantity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TotalCost {
    /// Hours the cost was computed for, as requested.
    pub hours: f64,
    /// `hours` times the blended rate.
    pub cost: f64,
    /// Sum of all assigned quantities.
    pub total_quantity: f64,
}

/// Computes the blended rate from scratch.
///
/// An empty catalog, or one where nobody is assigned, yields a zero rate
/// rather than dividing by zero.
pub fn blended_rate(catalog: &RoleCatalog) -> BlendedRate {
    let mut total_billable = 0.0;
    let mut total_quantity = 0.0;
    for entry in catalog.iter() {
        total_billable += entry.role.rate_per_hour * entry.quantity;
        total_quantity += entry.quantity;
    }

    if total_quantity == 0.0 {
        return BlendedRate {
            rate: 0.0,
            total_quantity: 0.0,
        };
    }

    BlendedRate {
        rate: total_billable / total_quantity,
        total_quantity,
    }
}

/// Cost of running the current mix for `hours`. Negative hours are not rejected.
pub fn total_cost(catalog: &RoleCatalog, hours: f64) -> TotalCost {
    let blended = blended_rate(catalog);
    TotalCost {
        hours,
        cost: hours * blended.rate,
        total_quantity: blended.total_quantity,
    }
}
