//! Abstraction demo: a mandatory capability invoked through the base contract.
//!
//! Run with: cargo run --bin abstraction

use oop_demos::vehicle::{demo_vehicles, start_all};

fn main() {
    start_all(&demo_vehicles());
}
