use crate::calculator::{BlendedRate, TotalCost};
use crate::catalog::RoleCatalog;
use crate::roster::AvailableRoles;

/// Renders tracker results as the text lines shown to the user.
#[derive(Debug, Clone)]
pub struct ReportFormatter {
    currency_symbol: String,
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new("$")
    }
}

impl ReportFormatter {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Two decimal places behind the currency symbol, e.g. `$46.00`.
    pub fn money(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }

    pub fn blended_rate(&self, blended: &BlendedRate) -> String {
        format!("Blended billable rate: {} per hour", self.money(blended.rate))
    }

    pub fn total_cost(&self, total: &TotalCost) -> String {
        format!(
            "Total Cost for {:?} hours: {}",
            total.hours,
            self.money(total.cost)
        )
    }

    /// One `name: quantity` line per catalog entry, in catalog order. Hours and
    /// quantities keep a trailing `.0` for whole numbers (`3.0`, `10.0`).
    pub fn people_per_role(&self, catalog: &RoleCatalog) -> String {
        catalog
            .iter()
            .map(|entry| format!("{}: {:?}\n", entry.role.name, entry.quantity))
            .collect()
    }

    pub fn registration(&self, name: &str, rate_per_hour: f64, ordinal: u64) -> String {
        format!(
            "{} with rate {} per hour added as Role {}",
            name,
            self.money(rate_per_hour),
            ordinal
        )
    }

    /// Numbered listing of the available roles, starting at 1. The selected
    /// row is marked with `*`.
    pub fn available_roles(&self, roster: &AvailableRoles) -> String {
        if roster.is_empty() {
            return "Available Roles: (none)\n".to_string();
        }
        let mut out = String::from("Available Roles:\n");
        for (idx, role) in roster.iter().enumerate() {
            let marker = if roster.selected_index() == Some(idx) {
                '*'
            } else {
                ' '
            };
            out.push_str(&format!(
                "{} {}. {} ({} per hour)\n",
                marker,
                idx + 1,
                role.name,
                self.money(role.rate_per_hour)
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    #[test]
    fn money_rounds_to_cents() {
        let fmt = ReportFormatter::new("€");
        assert_eq!(fmt.money(46.0), "€46.00");
        assert_eq!(fmt.money(1.005_f64 + 0.001), "€1.01");
        assert_eq!(fmt.money(-12.5), "€-12.50");
    }

    #[test]
    fn people_per_role_lists_in_catalog_order() {
        let mut catalog = RoleCatalog::new();
        catalog.add_role(Role::new("Engineer", 50.0), 3.0);
        catalog.add_role(Role::new("Designer", 40.0), 2.5);
        let text = ReportFormatter::default().people_per_role(&catalog);
        assert_eq!(text, "Engineer: 3.0\nDesigner: 2.5\n");
    }

    #[test]
    fn total_cost_line_matches_form_text() {
        let total = TotalCost {
            hours: 10.0,
            cost: 460.0,
            total_quantity: 5.0,
        };
        assert_eq!(
            ReportFormatter::default().total_cost(&total),
            "Total Cost for 10.0 hours: $460.00"
        );
    }
}
