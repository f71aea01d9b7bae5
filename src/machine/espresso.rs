//! The espresso machine itself.

use tracing::{debug, warn};

use super::error::MachineError;
use super::recipe::{Drink, Recipe};
use super::status::Status;
use crate::container::{
    BeansContainer, BeansHopper, ContainerError, LITRE_EPSILON, WaterContainer, WaterTank,
};

/// A simulated espresso machine over two depletable containers.
///
/// The machine owns exactly one beans container and one water container and
/// carries no other state; [`EspressoMachine::status`] is a pure function
/// of the container pair. Brewing is atomic over the pair: stock of both
/// resources is verified before either is deducted, so a failed brew leaves
/// both containers untouched.
///
/// The container slots are generic over the [`BeansContainer`] and
/// [`WaterContainer`] traits and default to the concrete types the crate
/// ships.
///
/// # Example
///
/// ```rust
/// use espresso::{BeansHopper, EspressoMachine, Status, WaterTank};
///
/// let mut machine = EspressoMachine::new(BeansHopper::new(25), WaterTank::new(2.0));
/// machine.add_beans(5).unwrap();
/// machine.add_water(0.30).unwrap();
///
/// assert_eq!(machine.status(), Status::EspressosLeft(5));
///
/// let litres = machine.make_espresso().unwrap();
/// assert_eq!(litres, 0.05);
/// assert_eq!(machine.beans(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct EspressoMachine<B = BeansHopper, W = WaterTank>
where
    B: BeansContainer,
    W: WaterContainer,
{
    beans: B,
    water: W,
}

impl<B: BeansContainer, W: WaterContainer> EspressoMachine<B, W> {
    /// Create a machine from its two containers, empty or pre-filled.
    pub fn new(beans: B, water: W) -> Self {
        Self { beans, water }
    }

    /// Brew a single espresso, consuming [`Recipe::SINGLE`].
    ///
    /// Returns the litres of coffee produced. Beans are checked before
    /// water, so [`MachineError::NoBeans`] wins when both are short.
    pub fn make_espresso(&mut self) -> Result<f64, MachineError> {
        self.brew(Drink::Single)
    }

    /// Brew a double espresso, consuming [`Recipe::DOUBLE`].
    ///
    /// Same contract as [`EspressoMachine::make_espresso`], scaled to two
    /// spoons and 0.10 litres.
    pub fn make_double_espresso(&mut self) -> Result<f64, MachineError> {
        self.brew(Drink::Double)
    }

    fn brew(&mut self, drink: Drink) -> Result<f64, MachineError> {
        let recipe = drink.recipe();
        if self.beans.beans() < recipe.spoons {
            warn!(drink = drink.name(), "brew refused: out of beans");
            return Err(MachineError::NoBeans {
                needed: recipe.spoons,
                available: self.beans.beans(),
            });
        }
        if self.water.water() + LITRE_EPSILON < recipe.litres {
            warn!(drink = drink.name(), "brew refused: out of water");
            return Err(MachineError::NoWater {
                needed: recipe.litres,
                available: self.water.water(),
            });
        }
        self.beans.use_beans(recipe.spoons);
        self.water.use_water(recipe.litres);
        debug!(drink = drink.name(), litres = recipe.litres, "brewed");
        Ok(recipe.litres)
    }

    /// What the machine's screen displays (pure).
    ///
    /// Exactly one status is reported, in strict priority order:
    ///
    /// 1. [`Status::AddBeansAndWater`] when both resources are below a
    ///    single-espresso dose
    /// 2. [`Status::AddBeans`] when only the beans are
    /// 3. [`Status::AddWater`] when only the water is
    /// 4. [`Status::EspressosLeft`] otherwise
    pub fn status(&self) -> Status {
        let beans_short = self.beans.beans() < Recipe::SINGLE.spoons;
        let water_short = self.water.water() + LITRE_EPSILON < Recipe::SINGLE.litres;
        match (beans_short, water_short) {
            (true, true) => Status::AddBeansAndWater,
            (true, false) => Status::AddBeans,
            (false, true) => Status::AddWater,
            (false, false) => Status::EspressosLeft(self.espressos_left()),
        }
    }

    /// Number of single espressos the current stock can still produce,
    /// limited by whichever resource runs out first (pure).
    pub fn espressos_left(&self) -> u32 {
        let by_beans = self.beans.beans() / Recipe::SINGLE.spoons;
        let by_water =
            ((self.water.water() + LITRE_EPSILON) / Recipe::SINGLE.litres).floor() as u32;
        by_beans.min(by_water)
    }

    /// Spoons of beans left in the hopper (pure).
    pub fn beans(&self) -> u32 {
        self.beans.beans()
    }

    /// Litres of water left in the tank (pure).
    pub fn water(&self) -> f64 {
        self.water.water()
    }

    /// Refill the beans container.
    pub fn add_beans(&mut self, spoons: u32) -> Result<(), ContainerError> {
        self.beans.add_beans(spoons)
    }

    /// Refill the water container.
    pub fn add_water(&mut self, litres: f64) -> Result<(), ContainerError> {
        self.water.add_water(litres)
    }

    /// Take the machine apart, returning its containers.
    pub fn into_containers(self) -> (B, W) {
        (self.beans, self.water)
    }
}
