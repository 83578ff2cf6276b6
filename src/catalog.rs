use crate::error::CatalogError;
use crate::role::Role;
use serde::{Deserialize, Serialize};

/// A role together with the headcount currently assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleEntry {
    /// The role and its authoritative rate.
    pub role: Role,
    /// Assigned headcount. Fractional values express partial allocations.
    pub quantity: f64,
}

/// Serializable view of a catalog, used for the shell's JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Ordinal the next registration will receive.
    pub next_role_number: u64,
    /// Entries in insertion order.
    pub entries: Vec<RoleEntry>,
}

/// In-memory store of roles keyed by name, in insertion order.
///
/// The catalog is the single source of truth for rates and quantities. At most
/// one entry exists per role name.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    entries: Vec<RoleEntry>,
    next_role_number: u64,
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleCatalog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_role_number: 1,
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.role.name == name)
    }

    /// Assigns `quantity` more people to `role`.
    ///
    /// An existing entry of the same name accumulates the quantity and keeps
    /// its current rate; the rate carried by `role` is ignored in that case.
    pub fn add_role(&mut self, role: Role, quantity: f64) {
        match self.position(&role.name) {
            Some(idx) => self.entries[idx].quantity += quantity,
            None => self.entries.push(RoleEntry { role, quantity }),
        }
    }

    /// Replaces the rate of `name` in place. Returns false when the role is unknown.
    pub fn update_role_rate(&mut self, name: &str, new_rate: f64) -> bool {
        match self.position(name) {
            Some(idx) => {
                self.entries[idx].role.rate_per_hour = new_rate;
                true
            }
            None => false,
        }
    }

    /// Registers `name` with zero headcount and returns its ordinal.
    ///
    /// Unlike [`RoleCatalog::add_role`], an existing entry of the same name is
    /// overwritten: the rate is replaced and the quantity drops back to 0.
    /// Ordinals start at 1 and are never handed out twice, not even after
    /// [`RoleCatalog::remove_role`] or [`RoleCatalog::clear`].
    pub fn register_new_role(
        &mut self,
        name: impl Into<String>,
        rate_per_hour: f64,
    ) -> Result<u64, CatalogError> {
        let ordinal = self.next_role_number;
        let next = ordinal
            .checked_add(1)
            .ok_or(CatalogError::OrdinalsExhausted)?;

        let entry = RoleEntry {
            role: Role::new(name, rate_per_hour),
            quantity: 0.0,
        };
        match self.position(&entry.role.name) {
            Some(idx) => self.entries[idx] = entry,
            None => self.entries.push(entry),
        }
        self.next_role_number = next;
        Ok(ordinal)
    }

    pub fn remove_role(&mut self, name: &str) -> Option<RoleEntry> {
        let idx = self.position(name)?;
        Some(self.entries.remove(idx))
    }

    /// Drops every entry. The ordinal counter keeps counting.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, name: &str) -> Option<&RoleEntry> {
        self.position(name).map(|idx| &self.entries[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn quantity_of(&self, name: &str) -> Option<f64> {
        self.get(name).map(|entry| entry.quantity)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn next_role_number(&self) -> u64 {
        self.next_role_number
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            next_role_number: self.next_role_number,
            entries: self.entries.clone(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_next_role_number(next_role_number: u64) -> Self {
        Self {
            entries: Vec::new(),
            next_role_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_fails_without_mutation_when_ordinals_run_out() {
        let mut catalog = RoleCatalog::with_next_role_number(u64::MAX);
        let err = catalog.register_new_role("Engineer", 50.0).unwrap_err();
        assert_eq!(err, CatalogError::OrdinalsExhausted);
        assert!(catalog.is_empty());
        assert_eq!(catalog.next_role_number(), u64::MAX);
    }

    #[test]
    fn register_hands_out_last_ordinal_before_exhaustion() {
        let mut catalog = RoleCatalog::with_next_role_number(u64::MAX - 1);
        assert_eq!(catalog.register_new_role("A", 1.0).unwrap(), u64::MAX - 1);
        assert!(catalog.register_new_role("B", 1.0).is_err());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn re_registering_keeps_position() {
        let mut catalog = RoleCatalog::new();
        catalog.register_new_role("A", 1.0).unwrap();
        catalog.register_new_role("B", 2.0).unwrap();
        catalog.register_new_role("A", 3.0).unwrap();
        let names: Vec<&str> = catalog.iter().map(|e| e.role.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(catalog.get("A").unwrap().role.rate_per_hour, 3.0);
    }
}
