use crate::error::ShellError;
use crate::role::Role;

/// The shell's list of roles offered for selection.
///
/// These are display copies only. Quantities and the authoritative rates live
/// in [`crate::RoleCatalog`].
#[derive(Debug, Clone, Default)]
pub struct AvailableRoles {
    roles: Vec<Role>,
    selection: Option<usize>,
}

impl AvailableRoles {
    pub fn new(roles: Vec<Role>) -> Self {
        Self {
            roles,
            selection: None,
        }
    }

    pub fn push(&mut self, role: Role) {
        self.roles.push(role);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.roles.iter().any(|role| role.name == name)
    }

    pub fn get(&self, index: usize) -> Option<&Role> {
        self.roles.get(index)
    }

    /// Removes the role at `index`. The selection is cleared since the list
    /// positions shift.
    pub fn remove(&mut self, index: usize) -> Option<Role> {
        if index >= self.roles.len() {
            return None;
        }
        self.selection = None;
        Some(self.roles.remove(index))
    }

    /// Updates the displayed rate for every copy named `name`.
    pub fn set_rate(&mut self, name: &str, rate_per_hour: f64) {
        for role in self.roles.iter_mut().filter(|role| role.name == name) {
            role.rate_per_hour = rate_per_hour;
        }
    }

    /// Selects the zero-based `index`.
    pub fn select(&mut self, index: usize) -> Result<&Role, ShellError> {
        let len = self.roles.len();
        match self.roles.get(index) {
            Some(role) => {
                self.selection = Some(index);
                Ok(role)
            }
            None => Err(ShellError::SelectionOutOfRange {
                number: index + 1,
                len,
            }),
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection
    }

    pub fn selected(&self) -> Result<&Role, ShellError> {
        self.selection
            .and_then(|idx| self.roles.get(idx))
            .ok_or(ShellError::NoSelection)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.roles.iter()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
