//! # OOP Dispatch Demos
//!
//! Two small programs showing how classic OOP teaching examples map onto
//! Rust traits:
//!
//! ## Polymorphism: `device`
//! - One capability (`power`) with a permissive no-op default
//! - Three variants, each printing its own line
//! - A heterogeneous `Vec<Box<dyn Device>>` invoked uniformly
//!
//! ## Abstraction: `vehicle`
//! - One required capability (`start`) with no default
//! - The base contract is not a constructible value, and omitting `start`
//!   in a concrete variant is a compile error
//!
//! Run demos with: `cargo run --bin polymorphism` and
//! `cargo run --bin abstraction`

pub mod device;
pub mod vehicle;
