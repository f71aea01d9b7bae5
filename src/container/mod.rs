//! Depletable resource containers.
//!
//! The machine draws on two containers: a [`BeansHopper`] measured in whole
//! spoons and a [`WaterTank`] measured in litres. Both follow the same
//! contract:
//! - additions are all-or-nothing against a fixed capacity
//! - consumption clamps to the available stock and reports what was
//!   actually removed
//! - queries are pure
//!
//! The [`BeansContainer`] and [`WaterContainer`] traits are the seams the
//! machine is generic over; the concrete types here are the only
//! implementations the crate ships.

mod beans;
mod error;
mod water;

pub use beans::{BeansContainer, BeansHopper};
pub use error::ContainerError;
pub use water::{WaterContainer, WaterTank};

pub(crate) use water::LITRE_EPSILON;
