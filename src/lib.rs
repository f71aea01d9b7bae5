//! Espresso: a simulated espresso machine
//!
//! The machine tracks two depletable resources - ground coffee beans
//! measured in spoons and water measured in litres - and brews by deducting
//! fixed recipe costs from both. Its screen reports a single prioritized
//! status: which resource to refill, or how many shots the remaining stock
//! is good for.
//!
//! # Core Concepts
//!
//! - **Containers**: a [`BeansHopper`] and a [`WaterTank`], each a bounded
//!   quantity with all-or-nothing addition and clamped consumption, behind
//!   the [`BeansContainer`] and [`WaterContainer`] traits
//! - **Recipes**: fixed per-drink costs ([`Recipe::SINGLE`],
//!   [`Recipe::DOUBLE`]); brewing is atomic over the container pair
//! - **Status**: a pure, prioritized view over the two stock levels
//! - **History**: an immutable ledger of pulled shots, threaded by the
//!   caller
//!
//! # Example
//!
//! ```rust
//! use espresso::{
//!     BeansHopper, BrewHistory, BrewRecord, Drink, EspressoMachine, Status, WaterTank,
//! };
//!
//! let mut machine = EspressoMachine::new(BeansHopper::new(25), WaterTank::new(2.0));
//! machine.add_beans(5).unwrap();
//! machine.add_water(0.30).unwrap();
//!
//! assert_eq!(machine.status().to_string(), "5 Espressos left");
//!
//! let mut history = BrewHistory::new();
//! machine.make_double_espresso().unwrap();
//! history = history.record(BrewRecord::new(Drink::Double));
//!
//! assert_eq!(machine.status(), Status::EspressosLeft(3));
//! assert_eq!(history.pulls(Drink::Double), 1);
//! ```
//!
//! The machine is single-threaded: brewing is check-then-deduct over two
//! containers and needs external locking to be atomic across threads.

pub mod container;
pub mod history;
pub mod machine;

// Re-export commonly used types
pub use container::{BeansContainer, BeansHopper, ContainerError, WaterContainer, WaterTank};
pub use history::{BrewHistory, BrewRecord};
pub use machine::{Drink, EspressoMachine, MachineError, Recipe, Status};
