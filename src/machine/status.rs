//! Machine status reporting.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// What the machine's screen displays.
///
/// Exactly one status applies at a time, chosen in refill-priority order:
/// both resources missing, then beans, then water, then the number of
/// single espressos the remaining stock can still produce. The `Display`
/// rendering is the human-readable screen text.
///
/// # Example
///
/// ```rust
/// use espresso::machine::Status;
///
/// assert_eq!(Status::AddBeansAndWater.to_string(), "Add beans and water");
/// assert_eq!(Status::EspressosLeft(3).to_string(), "3 Espressos left");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Both resources are below a single-espresso dose
    AddBeansAndWater,
    /// Fewer beans than a single espresso needs
    AddBeans,
    /// Less water than a single espresso needs
    AddWater,
    /// Number of single espressos the current stock can still produce
    EspressosLeft(u32),
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddBeansAndWater => write!(f, "Add beans and water"),
            Self::AddBeans => write!(f, "Add beans"),
            Self::AddWater => write!(f, "Add water"),
            Self::EspressosLeft(n) => write!(f, "{n} Espressos left"),
        }
    }
}
