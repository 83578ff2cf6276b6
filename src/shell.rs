use crate::calculator::{blended_rate, total_cost};
use crate::catalog::RoleCatalog;
use crate::config::TrackerConfig;
use crate::error::ShellError;
use crate::input::{parse_hours, parse_quantity, parse_rate};
use crate::report::ReportFormatter;
use crate::role::Role;
use crate::roster::AvailableRoles;
use tracing::{debug, info, warn};

const HELP: &str = "Commands:
  help                     Show this help
  roles                    List available roles (* marks the selection)
  select <index>           Select an available role by its listed number
  new <rate> <name...>     Register a new role with zero headcount
  add <quantity>           Assign headcount to the selected role
  delete                   Delete the selected role
  edit <rate>              Change the hourly rate of the selected role;
                           an unassigned role uses the new rate on its next add
  blended                  Show the blended rate and people per role
  cost <hours>             Show the total cost for a number of hours
  json                     Show the current catalog as JSON
  reset                    Clear all assignments and start over
  quit|exit                Exit";

/// Text produced by one shell command.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellResponse {
    pub output: String,
    pub quit: bool,
}

impl ShellResponse {
    fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }

    fn quit() -> Self {
        Self {
            output: String::new(),
            quit: true,
        }
    }
}

/// Interactive front end over a [`RoleCatalog`].
///
/// Each command mirrors one action of a resource tracking form: pick a role
/// from the available list, assign headcount, edit pay, and read back the
/// blended rate or total cost.
pub struct Shell {
    catalog: RoleCatalog,
    roster: AvailableRoles,
    formatter: ReportFormatter,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl Shell {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            catalog: RoleCatalog::new(),
            roster: AvailableRoles::new(config.available_roles),
            formatter: ReportFormatter::new(config.currency_symbol),
        }
    }

    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    pub fn roster(&self) -> &AvailableRoles {
        &self.roster
    }

    pub fn banner(&self) -> String {
        format!(
            "Resource Tracker - type 'help' for commands\n\n{}",
            self.formatter.available_roles(&self.roster)
        )
    }

    /// Runs one line of input. Errors are rendered into the response; state is
    /// left untouched whenever a command fails.
    pub fn execute(&mut self, line: &str) -> ShellResponse {
        let input = line.trim();
        if input.is_empty() {
            return ShellResponse::text("");
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();
        debug!(command = cmd, args = ?args, "executing shell command");

        match cmd {
            "quit" | "exit" => ShellResponse::quit(),
            _ => match self.dispatch(cmd, &args) {
                Ok(output) => ShellResponse::text(output),
                Err(err) => {
                    warn!(command = cmd, error = %err, "command rejected");
                    ShellResponse::text(format!("Error: {err}"))
                }
            },
        }
    }

    fn dispatch(&mut self, cmd: &str, args: &[&str]) -> Result<String, ShellError> {
        match cmd {
            "help" => Ok(HELP.to_string()),
            "roles" => Ok(self.formatter.available_roles(&self.roster)),
            "select" => match args {
                [index] => self.select(index),
                _ => Ok("Usage: select <index>".to_string()),
            },
            "new" => match args {
                [rate, name @ ..] if !name.is_empty() => self.new_role(rate, &name.join(" ")),
                _ => Ok("Usage: new <rate> <name...>".to_string()),
            },
            "add" => match args {
                [quantity] => self.add_quantity(quantity),
                _ => Ok("Usage: add <quantity>".to_string()),
            },
            "delete" => self.delete_selected(),
            "edit" => match args {
                [rate] => self.edit_rate(rate),
                _ => Ok("Usage: edit <rate>".to_string()),
            },
            "blended" => Ok(self.blended_report()),
            "cost" => match args {
                [hours] => self.cost(hours),
                _ => Ok("Usage: cost <hours>".to_string()),
            },
            "json" => Ok(serde_json::to_string_pretty(&self.catalog.snapshot())
                .unwrap_or_else(|err| format!("Error serializing catalog: {err}"))),
            "reset" => Ok(self.reset()),
            _ => Ok("Unknown command. Type 'help'.".to_string()),
        }
    }

    fn select(&mut self, index: &str) -> Result<String, ShellError> {
        let len = self.roster.len();
        let position = match index.parse::<usize>() {
            Ok(n) if n >= 1 => n - 1,
            _ => {
                return Err(ShellError::InvalidSelection {
                    input: index.to_string(),
                    len,
                });
            }
        };
        let role = self.roster.select(position)?;
        Ok(format!("Selected {}.", role.name))
    }

    fn new_role(&mut self, rate: &str, name: &str) -> Result<String, ShellError> {
        let rate = parse_rate(rate)?;
        let ordinal = self.catalog.register_new_role(name, rate)?;
        info!(role = name, rate, ordinal, "registered role");
        // Re-registering a listed name replaces its rate rather than adding a row.
        if self.roster.contains(name) {
            self.roster.set_rate(name, rate);
        } else {
            self.roster.push(Role::new(name, rate));
        }
        Ok(format!(
            "{}\n{}",
            self.formatter.registration(name, rate, ordinal),
            self.formatter.available_roles(&self.roster)
        ))
    }

    fn add_quantity(&mut self, quantity: &str) -> Result<String, ShellError> {
        let role = self.roster.selected()?.clone();
        let quantity = parse_quantity(quantity)?;
        let name = role.name.clone();
        self.catalog.add_role(role, quantity);
        let total = self.catalog.quantity_of(&name).unwrap_or(quantity);
        info!(role = %name, quantity, total, "assigned headcount");
        Ok(format!("Assigned {quantity} to {name} (now {total})."))
    }

    fn delete_selected(&mut self) -> Result<String, ShellError> {
        let index = self.roster.selected_index().ok_or(ShellError::NoSelection)?;
        let Some(role) = self.roster.remove(index) else {
            return Err(ShellError::NoSelection);
        };
        let removed = self.catalog.remove_role(&role.name).is_some();
        info!(role = %role.name, removed, "deleted role");
        Ok(format!(
            "Deleted {}.\n{}",
            role.name,
            self.blended_report()
        ))
    }

    fn edit_rate(&mut self, rate: &str) -> Result<String, ShellError> {
        let name = self.roster.selected()?.name.clone();
        let rate = parse_rate(rate)?;
        let updated = self.catalog.update_role_rate(&name, rate);
        self.roster.set_rate(&name, rate);
        info!(role = %name, rate, updated, "edited role rate");
        let mut out = format!("Rate for {} set to {} per hour.", name, self.formatter.money(rate));
        if !updated {
            out.push_str(" (no headcount assigned yet)");
        }
        out.push('\n');
        out.push_str(&self.formatter.available_roles(&self.roster));
        Ok(out)
    }

    fn cost(&self, hours: &str) -> Result<String, ShellError> {
        let hours = parse_hours(hours)?;
        Ok(self.formatter.total_cost(&total_cost(&self.catalog, hours)))
    }

    fn blended_report(&self) -> String {
        let blended = blended_rate(&self.catalog);
        format!(
            "{}\nPeople per Role:\n{}",
            self.formatter.blended_rate(&blended),
            self.formatter.people_per_role(&self.catalog)
        )
    }

    fn reset(&mut self) -> String {
        self.catalog.clear();
        info!("catalog reset");
        format!("Reset complete.\n{}", self.blended_report())
    }
}
