//! Water storage.
//!
//! Water is measured in litres. Recipe volumes such as 0.05 L are not
//! exactly representable in binary floating point, so capacity checks
//! tolerate accumulated rounding error via [`LITRE_EPSILON`].

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::error::ContainerError;

/// Tolerance for litre comparisons; absorbs rounding drift from repeated
/// recipe-sized additions and deductions.
pub(crate) const LITRE_EPSILON: f64 = 1e-9;

/// Capability for storing and dispensing litres of water.
///
/// # Example
///
/// ```rust
/// use espresso::container::{WaterContainer, WaterTank};
///
/// let mut tank = WaterTank::new(2.0);
/// tank.add_water(0.5).unwrap();
///
/// assert_eq!(tank.water(), 0.5);
/// assert_eq!(tank.use_water(0.8), 0.5); // clamped to the available volume
/// assert_eq!(tank.water(), 0.0);
/// ```
pub trait WaterContainer {
    /// Add `litres` of water to the container.
    ///
    /// Fails with [`ContainerError::Full`] when the addition would exceed
    /// the container's capacity, leaving the volume unchanged. Filling to
    /// exactly capacity succeeds.
    fn add_water(&mut self, litres: f64) -> Result<(), ContainerError>;

    /// Remove up to `litres` of water, returning the amount actually
    /// removed. May return less than requested, down to 0.0, when the
    /// volume runs short; never drives the volume negative.
    fn use_water(&mut self, litres: f64) -> f64;

    /// The volume currently stored, in litres (pure).
    fn water(&self) -> f64;
}

/// Fixed-capacity water tank.
///
/// Maintains the invariant `0.0 <= water() <= capacity()` at all times.
/// Negative amounts passed to `add_water` or `use_water` are treated as
/// zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaterTank {
    litres: f64,
    capacity: f64,
}

impl WaterTank {
    /// Create an empty tank holding at most `capacity` litres.
    pub fn new(capacity: f64) -> Self {
        Self {
            litres: 0.0,
            capacity,
        }
    }

    /// The maximum volume the tank can hold, in litres (pure).
    pub fn capacity(&self) -> f64 {
        self.capacity
    }
}

impl WaterContainer for WaterTank {
    fn add_water(&mut self, litres: f64) -> Result<(), ContainerError> {
        let litres = litres.max(0.0);
        if self.litres + litres > self.capacity + LITRE_EPSILON {
            return Err(ContainerError::Full {
                requested: litres,
                capacity: self.capacity,
            });
        }
        // clamp so rounding drift cannot push the level past capacity
        self.litres = (self.litres + litres).min(self.capacity);
        trace!(added = litres, level = self.litres, "water added");
        Ok(())
    }

    fn use_water(&mut self, litres: f64) -> f64 {
        let used = litres.max(0.0).min(self.litres);
        self.litres -= used;
        trace!(used, level = self.litres, "water used");
        used
    }

    fn water(&self) -> f64 {
        self.litres
    }
}
