//! Polymorphism demo: one capability name, different behavior per variant.
//!
//! The base contract deliberately ships a no-op default for `power`, so a
//! type may implement [`Device`] without overriding it and stay silent.

/// A category of appliance with a single `power` capability.
pub trait Device {
    /// Display label for the variant.
    fn name(&self) -> &'static str;

    /// Switch the device on, printing one category-specific line.
    ///
    /// The default is inert: calling it is legal and prints nothing.
    fn power(&self) {}
}

pub struct Tv;
pub struct SoundSystem;
pub struct AirConditioner;

impl Device for Tv {
    fn name(&self) -> &'static str {
        "TV"
    }

    fn power(&self) {
        println!("TV turns on 📺");
    }
}

impl Device for SoundSystem {
    fn name(&self) -> &'static str {
        "Sound system"
    }

    fn power(&self) {
        println!("Sound system starts playing 🎶");
    }
}

impl Device for AirConditioner {
    fn name(&self) -> &'static str {
        "Air conditioner"
    }

    fn power(&self) {
        println!("Air conditioner starts cooling ❄️");
    }
}

/// The fixed demo fleet, in print order.
pub fn demo_devices() -> Vec<Box<dyn Device>> {
    vec![Box::new(Tv), Box::new(SoundSystem), Box::new(AirConditioner)]
}

/// Same method call, different behaviors: the concrete `power` is selected
/// at call time from each element's actual type.
pub fn power_all(devices: &[Box<dyn Device>]) {
    for device in devices {
        device.power();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // No power override: inherits the inert default.
    struct Doorbell;

    impl Device for Doorbell {
        fn name(&self) -> &'static str {
            "Doorbell"
        }
    }

    #[test]
    fn default_power_is_a_silent_no_op() {
        Doorbell.power();
    }

    #[test]
    fn demo_fleet_has_three_devices_in_fixed_order() {
        let devices = demo_devices();
        let names: Vec<_> = devices.iter().map(|d| d.name()).collect();
        assert_eq!(names, ["TV", "Sound system", "Air conditioner"]);
    }

    #[test]
    fn dispatch_works_over_a_mixed_collection() {
        let devices: Vec<Box<dyn Device>> = vec![Box::new(Doorbell), Box::new(Tv)];
        power_all(&devices);
    }
}
