//! Bean storage.
//!
//! Beans are measured in whole spoons. Additions are all-or-nothing against
//! a fixed capacity, while consumption clamps to the available stock and
//! reports what was actually removed.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::error::ContainerError;

/// Capability for storing and dispensing spoons of ground coffee.
///
/// # Example
///
/// ```rust
/// use espresso::container::{BeansContainer, BeansHopper};
///
/// let mut hopper = BeansHopper::new(10);
/// hopper.add_beans(4).unwrap();
///
/// assert_eq!(hopper.beans(), 4);
/// assert_eq!(hopper.use_beans(6), 4); // clamped to the available stock
/// assert_eq!(hopper.beans(), 0);
/// ```
pub trait BeansContainer {
    /// Add `spoons` of beans to the container.
    ///
    /// Fails with [`ContainerError::Full`] when the addition would exceed
    /// the container's capacity, leaving the stock unchanged.
    fn add_beans(&mut self, spoons: u32) -> Result<(), ContainerError>;

    /// Remove up to `spoons` of beans, returning the amount actually
    /// removed. May return less than requested, down to 0, when the stock
    /// runs short.
    fn use_beans(&mut self, spoons: u32) -> u32;

    /// The number of spoons currently stored (pure).
    fn beans(&self) -> u32;
}

/// Fixed-capacity hopper of ground coffee.
///
/// Maintains the invariant `beans() <= capacity()` at all times.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeansHopper {
    spoons: u32,
    capacity: u32,
}

impl BeansHopper {
    /// Create an empty hopper holding at most `capacity` spoons.
    pub fn new(capacity: u32) -> Self {
        Self { spoons: 0, capacity }
    }

    /// The maximum number of spoons the hopper can hold (pure).
    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}

impl BeansContainer for BeansHopper {
    fn add_beans(&mut self, spoons: u32) -> Result<(), ContainerError> {
        match self.spoons.checked_add(spoons) {
            Some(total) if total <= self.capacity => {
                self.spoons = total;
                trace!(added = spoons, level = self.spoons, "beans added");
                Ok(())
            }
            _ => Err(ContainerError::Full {
                requested: f64::from(spoons),
                capacity: f64::from(self.capacity),
            }),
        }
    }

    fn use_beans(&mut self, spoons: u32) -> u32 {
        let used = spoons.min(self.spoons);
        self.spoons -= used;
        trace!(used, level = self.spoons, "beans used");
        used
    }

    fn beans(&self) -> u32 {
        self.spoons
    }
}
