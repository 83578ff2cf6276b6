pub mod calculator;
pub mod catalog;
pub mod config;
pub mod error;
pub mod input;
#[cfg(feature = "cli")]
pub mod logging;
pub mod report;
pub mod role;
pub mod roster;
pub mod shell;

pub use calculator::{BlendedRate, TotalCost, blended_rate, total_cost};
pub use catalog::{CatalogSnapshot, RoleCatalog, RoleEntry};
pub use config::TrackerConfig;
pub use error::{CatalogError, ConfigError, InputError, Result, ShellError, TrackerError};
pub use role::Role;
pub use roster::AvailableRoles;
pub use shell::{Shell, ShellResponse};
