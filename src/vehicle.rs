//! Abstraction demo: a required capability on a base that cannot be built.
//!
//! Unlike [`crate::device::Device`], the `start` capability has no default
//! body, so the compiler enforces the contract instead of a runtime check.

/// A category of vehicle. The contract requires `start`; there is no
/// usable default.
///
/// The base itself is not a constructible value:
///
/// ```compile_fail
/// use oop_demos::vehicle::Vehicle;
///
/// let v = Vehicle;
/// ```
///
/// Every concrete variant must supply `start`:
///
/// ```compile_fail
/// use oop_demos::vehicle::Vehicle;
///
/// struct Skateboard;
///
/// impl Vehicle for Skateboard {
///     fn name(&self) -> &'static str {
///         "Skateboard"
///     }
/// }
/// ```
pub trait Vehicle {
    /// Display label for the variant.
    fn name(&self) -> &'static str;

    /// Start the vehicle, printing one category-specific line.
    fn start(&self);
}

pub struct Car;
pub struct Bike;

impl Vehicle for Car {
    fn name(&self) -> &'static str {
        "Car"
    }

    fn start(&self) {
        println!("Car engine starts 🚗");
    }
}

impl Vehicle for Bike {
    fn name(&self) -> &'static str {
        "Bike"
    }

    fn start(&self) {
        println!("Bike engine starts 🏍️");
    }
}

/// The fixed demo garage, in print order.
pub fn demo_vehicles() -> Vec<Box<dyn Vehicle>> {
    vec![Box::new(Car), Box::new(Bike)]
}

/// Invoke `start` on every element, dispatching on its actual type.
pub fn start_all(vehicles: &[Box<dyn Vehicle>]) {
    for vehicle in vehicles {
        vehicle.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_garage_has_two_vehicles_in_fixed_order() {
        let vehicles = demo_vehicles();
        let names: Vec<_> = vehicles.iter().map(|v| v.name()).collect();
        assert_eq!(names, ["Car", "Bike"]);
    }

    #[test]
    fn dispatch_works_over_the_demo_garage() {
        start_all(&demo_vehicles());
    }
}
