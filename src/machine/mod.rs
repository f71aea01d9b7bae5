//! The espresso machine: recipes, brewing, and status reporting.
//!
//! This module composes the two containers into an [`EspressoMachine`]:
//! - [`Recipe`] fixes the per-drink resource costs
//! - brewing verifies both stocks before deducting either
//! - [`Status`] is the prioritized screen report over the container pair

mod error;
mod espresso;
mod recipe;
mod status;

pub use error::MachineError;
pub use espresso::EspressoMachine;
pub use recipe::{Drink, Recipe};
pub use status::Status;
