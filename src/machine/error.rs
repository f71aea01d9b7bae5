//! Brew error types.

use thiserror::Error;

/// Errors raised by the brewing operations.
///
/// The brewing path checks beans before water, so [`MachineError::NoBeans`]
/// takes precedence when both resources are short. A failed brew leaves
/// both containers untouched.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MachineError {
    /// Not enough beans in the hopper for the requested drink.
    #[error("out of beans: {needed} spoons needed, {available} left")]
    NoBeans { needed: u32, available: u32 },

    /// Not enough water in the tank for the requested drink.
    #[error("out of water: {needed} litres needed, {available} left")]
    NoWater { needed: f64, available: f64 },
}
