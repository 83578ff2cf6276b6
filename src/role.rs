use serde::{Deserialize, Serialize};

/// A named job category billed at an hourly rate. The name is the identity key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Display name, unique within a catalog.
    pub name: String,
    /// Billing rate per hour of work.
    pub rate_per_hour: f64,
}

impl Role {
    pub fn new(name: impl Into<String>, rate_per_hour: f64) -> Self {
        Self {
            name: name.into(),
            rate_per_hour,
        }
    }
}
