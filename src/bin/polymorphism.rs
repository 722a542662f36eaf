//! Polymorphism demo: one list, one call, three behaviors.
//!
//! Run with: cargo run --bin polymorphism

use oop_demos::device::{demo_devices, power_all};

fn main() {
    power_all(&demo_devices());
}
